use parking_lot::{Condvar, Mutex};

use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, Mark};

/// The single game instance both players share.
///
/// Every read and write goes through one lock. `turn_changed` is signalled
/// with that lock held after each accepted move, so a player waiting in
/// [`SharedGameState::block_until_turn_or_done`] cannot miss a handoff.
pub struct SharedGameState {
    state: Mutex<TicTacToeGameState>,
    turn_changed: Condvar,
}

impl Default for SharedGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedGameState {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TicTacToeGameState::new()),
            turn_changed: Condvar::new(),
        }
    }

    /// Returns `true` if the mark was placed. A rejected proposal leaves the game untouched.
    pub fn attempt_move(&self, player: Mark, row: usize, col: usize) -> bool {
        self.try_move(player, row, col).is_ok()
    }

    /// Like [`SharedGameState::attempt_move`], but returns the state right after the
    /// accepted move, or the reason the move was rejected.
    pub fn try_move(&self, player: Mark, row: usize, col: usize) -> Result<TicTacToeGameState, String> {
        let mut state = self.state.lock();
        state.place_mark(player, row, col)?;
        let snapshot = state.clone();
        self.turn_changed.notify_all();
        Ok(snapshot)
    }

    pub fn is_terminal(&self) -> bool {
        self.state.lock().status.is_terminal()
    }

    pub fn get_outcome(&self) -> GameStatus {
        self.state.lock().status
    }

    pub fn snapshot(&self) -> TicTacToeGameState {
        self.state.lock().clone()
    }

    pub fn block_until_turn_or_done(&self, player: Mark) {
        let mut state = self.state.lock();
        while !state.status.is_terminal() && state.current_mark != player {
            self.turn_changed.wait(&mut state);
        }
    }
}
