use super::decision::Decision;
use super::solver::Solver;
use crate::game::board::Board;
use crate::game::outcome::Outcome;
use crate::game::symbol::Symbol;
use std::collections::HashSet;

/// per-cell link targets for a published position: the canonical
/// key of the successor reached by marking that cell, with the
/// machine's reply already folded in. occupied cells and the cells
/// of finished boards carry no target.
pub type Links = [Option<String>; 9];

/// walk over the perfect-play graph: every position the human can
/// reach when the machine's replies are all solver-optimal. the
/// graph is not a tree, since many move orders merge into the same
/// board, so a visited set keyed on canonical keys collapses the
/// merges and an explicit work list stands in for call-stack
/// recursion. positions behind sub-optimal machine replies are
/// never generated.
#[derive(Default)]
pub struct Walker {
    solver: Solver,
    visited: HashSet<String>,
}

impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    /// delegate to the owned solver. the memo table persists
    /// across traversals for the lifetime of this walker.
    pub fn solve(&mut self, board: Board, mover: Symbol) -> Decision {
        self.solver.solve(board, mover)
    }

    pub fn solved(&self) -> usize {
        self.solver.solved()
    }

    /// unique positions visited so far, across every traversal
    pub fn visited(&self) -> usize {
        self.visited.len()
    }

    /// visit every position reachable from start, exactly once,
    /// passing each board and its successor links. revisits are
    /// no-ops, within one traversal and across earlier ones.
    pub fn traverse<F>(&mut self, start: Board, visit: &mut F) -> anyhow::Result<()>
    where
        F: FnMut(&Board, &Links) -> anyhow::Result<()>,
    {
        let mut stack = vec![start];
        while let Some(board) = stack.pop() {
            if !self.visited.insert(board.key()) {
                continue;
            }
            let mut links: Links = std::array::from_fn(|_| None);
            let outcome = Outcome::from(board);
            if !outcome.decided() {
                for (x, y) in board.moves() {
                    let reply = self.reply(board, x, y);
                    links[y * 3 + x] = Some(reply.key());
                    stack.push(reply);
                }
            }
            log::debug!("visiting {} ({})", board.key(), outcome);
            visit(&board, &links)?;
        }
        Ok(())
    }

    /// where the human lands after marking (x, y): either that
    /// move finishes the game outright, or the machine's optimal
    /// counter-move is applied on top of it.
    fn reply(&mut self, board: Board, x: usize, y: usize) -> Board {
        let child = board.place(x, y, crate::HUMAN);
        match Outcome::from(child) {
            Outcome::Undecided => {
                let counter = self.solver.solve(child, crate::ROBOT);
                child.place(counter.x, counter.y, crate::ROBOT)
            }
            _ => child,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn visits_each_position_exactly_once() {
        let mut walker = Walker::new();
        let mut seen = HashMap::new();
        walker
            .traverse(Board::empty(), &mut |board, _| {
                *seen.entry(board.key()).or_insert(0) += 1;
                Ok(())
            })
            .unwrap();
        assert!(seen.values().all(|count| *count == 1));
        assert!(seen.len() == walker.visited());
    }

    #[test]
    fn retraversal_is_a_no_op() {
        let mut walker = Walker::new();
        walker.traverse(Board::empty(), &mut |_, _| Ok(())).unwrap();
        let visited = walker.visited();
        let mut revisits = 0;
        walker
            .traverse(Board::empty(), &mut |_, _| {
                revisits += 1;
                Ok(())
            })
            .unwrap();
        assert!(revisits == 0);
        assert!(walker.visited() == visited);
    }

    #[test]
    fn terminal_seeds_have_no_edges() {
        let mut walker = Walker::new();
        let mut pages = 0;
        walker
            .traverse(Board::filled(Symbol::X), &mut |_, links| {
                pages += 1;
                assert!(links.iter().all(|link| link.is_none()));
                Ok(())
            })
            .unwrap();
        assert!(pages == 1);
    }

    #[test]
    fn links_point_at_visited_pages() {
        let mut walker = Walker::new();
        let mut keys = HashSet::new();
        let mut targets = Vec::new();
        walker
            .traverse(Board::empty(), &mut |board, links| {
                keys.insert(board.key());
                targets.extend(links.iter().flatten().cloned());
                Ok(())
            })
            .unwrap();
        assert!(!targets.is_empty());
        assert!(targets.iter().all(|target| keys.contains(target)));
    }

    #[test]
    fn links_only_on_open_cells() {
        let mut walker = Walker::new();
        walker
            .traverse(Board::empty(), &mut |board, links| {
                for (i, link) in links.iter().enumerate() {
                    if link.is_some() {
                        assert!(board.cell(i).is_none());
                    }
                }
                Ok(())
            })
            .unwrap();
    }
}
