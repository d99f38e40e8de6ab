use super::board::Board;
use super::types::{LineKind, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| find_line(board, mark))
}

/// Returns the first complete line of `mark`, scanning rows, columns, then diagonals.
pub fn find_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    LineKind::ALL
        .into_iter()
        .find(|kind| kind.cells().iter().all(|&cell| board.get(cell) == Some(mark)))
        .map(|kind| WinningLine::new(mark, kind))
}
