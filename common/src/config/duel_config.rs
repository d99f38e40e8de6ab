use serde::{Deserialize, Serialize};

use super::Validate;

pub const DEFAULT_MOVE_DELAY_MS: u64 = 300;
pub const MAX_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DuelConfig {
    #[serde(default = "default_move_delay_ms")]
    pub move_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_move_delay_ms() -> u64 {
    DEFAULT_MOVE_DELAY_MS
}

impl Validate for DuelConfig {
    fn validate(&self) -> Result<(), String> {
        if self.move_delay_ms > MAX_MOVE_DELAY_MS {
            return Err(format!(
                "move_delay_ms must not exceed {} (got {})",
                MAX_MOVE_DELAY_MS, self.move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            move_delay_ms: DEFAULT_MOVE_DELAY_MS,
            seed: None,
        }
    }
}
