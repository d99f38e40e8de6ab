use super::board::Board;
use super::types::{BOARD_SIZE, GameStatus, Mark, Position, WinningLine};
use super::win_detector::find_line;

/// Unsynchronized game rules. `SharedGameState` wraps this behind a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
    pub move_count: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
            move_count: 0,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, row: usize, col: usize) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        let position = Position::new(row, col);
        if !self.board.is_valid_move(row, col) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(position, mark);
        self.last_move = Some(position);
        self.move_count += 1;

        self.check_game_over(mark);

        if !self.status.is_terminal() {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self, mark: Mark) {
        if let Some(line) = find_line(&self.board, mark) {
            if let Some(status) = GameStatus::won_by(mark) {
                self.status = status;
                self.winning_line = Some(line);
            }
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
