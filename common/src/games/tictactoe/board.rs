use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};

const ROW_SEPARATOR: &str = "-----------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from rows of `'X'`, `'O'` and anything else for empty.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        if !position.is_on_board() {
            return None;
        }
        Some(self.cells[position.row][position.col])
    }

    pub(crate) fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.get(Position::new(row, col)) == Some(Mark::Empty)
    }

    pub fn get_available_moves(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.cells[position.row][position.col] == Mark::Empty)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    fn positions(&self) -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
            write!(f, " {}", line.join(" | "))?;
            if i + 1 < BOARD_SIZE {
                write!(f, "\n{}\n", ROW_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.get_available_moves().len(), 9);
        assert_eq!(board.count(Mark::Empty), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_out_of_range_cells_are_not_valid_moves() {
        let board = Board::new();

        assert_eq!(board.get(Position::new(3, 0)), None);
        assert!(!board.is_valid_move(0, 3));
        assert!(!board.is_valid_move(usize::MAX, 1));
    }

    #[test]
    fn test_occupied_cell_is_not_available() {
        let board = Board::from_rows(["X  ", " O ", "   "]);

        assert!(!board.is_valid_move(0, 0));
        assert!(!board.is_valid_move(1, 1));
        assert!(board.is_valid_move(2, 2));
        assert_eq!(board.get_available_moves().len(), 7);
    }

    #[test]
    fn test_render_matches_console_layout() {
        let board = Board::from_rows(["XOX", " O ", "  X"]);

        let expected = " X | O | X\n-----------\n   | O |  \n-----------\n   |   | X";
        assert_eq!(board.to_string(), expected);
    }
}
