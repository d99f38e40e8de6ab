use super::game_state::TicTacToeGameState;
use super::types::{Mark, Position};

/// Receives every accepted move. Called from the player's own thread.
pub trait MoveObserver: Sync {
    fn on_move(&self, mark: Mark, position: Position, state: &TicTacToeGameState);
}

impl MoveObserver for () {
    fn on_move(&self, _mark: Mark, _position: Position, _state: &TicTacToeGameState) {}
}
