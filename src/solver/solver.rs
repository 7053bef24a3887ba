use super::decision::Decision;
use crate::game::board::Board;
use crate::game::outcome::Outcome;
use crate::game::symbol::Symbol;
use std::collections::HashMap;

/// exhaustive memoized minimax over (position, mover) pairs.
/// the legal state space is ~5,478 positions and shared
/// heavily across move orders, so each pair is evaluated
/// exactly once and every later lookup is a cache hit.
/// entries are write-once and live as long as the solver.
#[derive(Default)]
pub struct Solver {
    memo: HashMap<(Board, Symbol), Decision>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// number of (position, mover) pairs evaluated so far
    pub fn solved(&self) -> usize {
        self.memo.len()
    }

    /// best response for the mover assuming optimal opposition
    /// thereafter. ties break toward the first move in row-major
    /// order. the position must be undecided; asking about a
    /// finished game is a caller bug, fatal in debug builds.
    pub fn solve(&mut self, board: Board, mover: Symbol) -> Decision {
        if let Some(decision) = self.memo.get(&(board, mover)) {
            return *decision;
        }
        debug_assert!(
            !Outcome::from(board).decided(),
            "solve on a decided position: {}",
            board.key()
        );
        let mut best: Option<Decision> = None;
        for (x, y) in board.moves() {
            let child = board.place(x, y, mover);
            let value = match Outcome::from(child) {
                Outcome::Win(winner) if winner == mover => 1,
                Outcome::Win(_) => -1,
                Outcome::Draw => 0,
                // zero-sum: the opponent's best is our worst
                Outcome::Undecided => -self.solve(child, mover.opponent()).value,
            };
            // strict comparison keeps the first-seen maximum
            if best.map_or(true, |b| value > b.value) {
                best = Some(Decision { x, y, value });
            }
        }
        let decision = best.expect("undecided position has at least one move");
        self.memo.insert((board, mover), decision);
        decision
    }
}
