use super::board::Board;
use super::symbol::Symbol;

/// the 8 winning lines: 3 rows, 3 columns, 2 diagonals
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// terminal classification of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Symbol),
    Draw,
    Undecided,
}

impl Outcome {
    pub fn decided(&self) -> bool {
        *self != Self::Undecided
    }

    fn streak(board: &Board, line: &[usize; 3]) -> Option<Symbol> {
        match (board.cell(line[0]), board.cell(line[1]), board.cell(line[2])) {
            (Some(a), Some(b), Some(c)) if a == b && b == c => Some(a),
            _ => None,
        }
    }
}

impl From<Board> for Outcome {
    fn from(board: Board) -> Self {
        let mut streaks = LINES.iter().filter_map(|line| Self::streak(&board, line));
        match streaks.next() {
            Some(winner) => {
                // two lines can only disagree if marks were placed illegally
                debug_assert!(
                    streaks.all(|other| other == winner),
                    "conflicting win lines on {}",
                    board.key()
                );
                Self::Win(winner)
            }
            None if board.moves().next().is_none() => Self::Draw,
            None => Self::Undecided,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win(symbol) => write!(f, "{} wins", symbol),
            Self::Draw => write!(f, "draw"),
            Self::Undecided => write!(f, "undecided"),
        }
    }
}
