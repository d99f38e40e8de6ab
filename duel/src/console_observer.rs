use std::io::Write;

use common::games::tictactoe::{Board, Mark, MoveObserver, Position, TicTacToeGameState};

/// Prints each accepted move and the board right after it.
pub struct ConsoleObserver;

impl MoveObserver for ConsoleObserver {
    fn on_move(&self, mark: Mark, position: Position, state: &TicTacToeGameState) {
        let text = render_move(mark, position, &state.board);
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

pub fn render_move(mark: Mark, position: Position, board: &Board) -> String {
    format!("Player {} played at {}\n\n{}\n\n", mark, position, board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_move() {
        let board = Board::from_rows(["X  ", "   ", "   "]);

        let text = render_move(Mark::X, Position::new(0, 0), &board);

        assert_eq!(
            text,
            "Player X played at (0, 0)\n\n X |   |  \n-----------\n   |   |  \n-----------\n   |   |  \n\n"
        );
    }
}
