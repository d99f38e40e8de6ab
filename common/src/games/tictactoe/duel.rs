use std::panic;
use std::thread;
use std::time::Duration;

use crate::config::DuelConfig;
use crate::games::SessionRng;
use crate::log;

use super::game_state::TicTacToeGameState;
use super::observer::MoveObserver;
use super::player_agent::{PlayerAgent, PlayerReport};
use super::shared_state::SharedGameState;
use super::types::{GameStatus, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelSettings {
    pub seed: u64,
    pub move_delay: Duration,
}

impl DuelSettings {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            move_delay: Duration::ZERO,
        }
    }

    pub fn with_move_delay(mut self, move_delay: Duration) -> Self {
        self.move_delay = move_delay;
        self
    }

    /// A config without a seed gets a fresh random one.
    pub fn from_config(config: &DuelConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| SessionRng::from_random().seed());
        Self::new(seed).with_move_delay(Duration::from_millis(config.move_delay_ms))
    }
}

#[derive(Debug, Clone)]
pub struct DuelReport {
    pub seed: u64,
    pub outcome: GameStatus,
    pub final_state: TicTacToeGameState,
    pub player_x: PlayerReport,
    pub player_o: PlayerReport,
}

impl DuelReport {
    pub fn summary(&self) -> String {
        if let Some(winner) = self.outcome.winner() {
            return match self.final_state.winning_line {
                Some(line) => format!("Player {} won! ({})", winner, line.kind),
                None => format!("Player {} won!", winner),
            };
        }

        match self.outcome {
            GameStatus::Draw => "Draw!".to_string(),
            _ => "Game did not finish".to_string(),
        }
    }
}

/// Plays one game with X and O on two threads and waits for both to finish.
pub fn run_duel<O: MoveObserver + ?Sized>(settings: &DuelSettings, observer: &O) -> DuelReport {
    let game = SharedGameState::new();
    let mut seeds = SessionRng::new(settings.seed);
    let x_rng = seeds.split();
    let o_rng = seeds.split();

    log!(
        "Starting duel (seed {}, move delay {} ms)",
        settings.seed,
        settings.move_delay.as_millis()
    );

    let (player_x, player_o) = thread::scope(|scope| {
        let x = scope.spawn(|| {
            PlayerAgent::new(Mark::X, &game, x_rng, observer)
                .with_move_delay(settings.move_delay)
                .play()
        });
        let o = scope.spawn(|| {
            PlayerAgent::new(Mark::O, &game, o_rng, observer)
                .with_move_delay(settings.move_delay)
                .play()
        });

        let x = x.join().unwrap_or_else(|e| panic::resume_unwind(e));
        let o = o.join().unwrap_or_else(|e| panic::resume_unwind(e));
        (x, o)
    });

    let final_state = game.snapshot();
    log!(
        "Duel finished after {} moves: {:?} (seed {}; X made {} moves in {} attempts, O made {} moves in {} attempts)",
        final_state.move_count,
        final_state.status,
        settings.seed,
        player_x.moves_made,
        player_x.attempts,
        player_o.moves_made,
        player_o.attempts
    );

    DuelReport {
        seed: settings.seed,
        outcome: final_state.status,
        final_state,
        player_x,
        player_o,
    }
}
