mod config_content_provider;
mod config_manager;
mod config_serializer;
mod duel_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use duel_config::{DEFAULT_MOVE_DELAY_MS, DuelConfig, MAX_MOVE_DELAY_MS};
pub use validate::Validate;
