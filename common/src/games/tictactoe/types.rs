use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn won_by(mark: Mark) -> Option<GameStatus> {
        match mark {
            Mark::X => Some(GameStatus::XWon),
            Mark::O => Some(GameStatus::OWon),
            Mark::Empty => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight three-in-a-row lines of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl LineKind {
    pub const ALL: [LineKind; 8] = [
        LineKind::Row(0),
        LineKind::Row(1),
        LineKind::Row(2),
        LineKind::Column(0),
        LineKind::Column(1),
        LineKind::Column(2),
        LineKind::MainDiagonal,
        LineKind::AntiDiagonal,
    ];

    pub fn cells(&self) -> [Position; BOARD_SIZE] {
        match *self {
            LineKind::Row(row) => [0, 1, 2].map(|col| Position::new(row, col)),
            LineKind::Column(col) => [0, 1, 2].map(|row| Position::new(row, col)),
            LineKind::MainDiagonal => [0, 1, 2].map(|i| Position::new(i, i)),
            LineKind::AntiDiagonal => [0, 1, 2].map(|i| Position::new(i, BOARD_SIZE - 1 - i)),
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row(0) => write!(f, "top row"),
            LineKind::Row(1) => write!(f, "middle row"),
            LineKind::Row(_) => write!(f, "bottom row"),
            LineKind::Column(0) => write!(f, "left column"),
            LineKind::Column(1) => write!(f, "middle column"),
            LineKind::Column(_) => write!(f, "right column"),
            LineKind::MainDiagonal => write!(f, "main diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub kind: LineKind,
}

impl WinningLine {
    pub fn new(mark: Mark, kind: LineKind) -> Self {
        Self { mark, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips_players() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_status_winner_matches_won_by() {
        assert_eq!(GameStatus::won_by(Mark::X).and_then(|s| s.winner()), Some(Mark::X));
        assert_eq!(GameStatus::won_by(Mark::O).and_then(|s| s.winner()), Some(Mark::O));
        assert_eq!(GameStatus::won_by(Mark::Empty), None);
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }

    #[test]
    fn test_anti_diagonal_cells() {
        let cells = LineKind::AntiDiagonal.cells();

        assert_eq!(cells, [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]);
    }

    #[test]
    fn test_winning_line_names_its_column() {
        let line = WinningLine::new(Mark::O, LineKind::Column(1));

        assert_eq!(line.kind.cells(), [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)]);
        assert_eq!(line.kind.to_string(), "middle column");
    }
}
