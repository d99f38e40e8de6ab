mod board;
mod duel;
mod game_state;
mod observer;
mod player_agent;
mod shared_state;
mod types;
mod win_detector;

pub use board::Board;
pub use duel::{DuelReport, DuelSettings, run_duel};
pub use game_state::TicTacToeGameState;
pub use observer::MoveObserver;
pub use player_agent::{PlayerAgent, PlayerReport};
pub use shared_state::SharedGameState;
pub use types::{BOARD_SIZE, GameStatus, LineKind, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, find_line};
