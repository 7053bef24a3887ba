use super::press::Press;
use crate::game::board::Board;
use crate::solver::walker::Links;
use crate::solver::walker::Walker;
use std::path::Path;

/// solve the game and publish the complete perfect-play book:
/// one page per position reachable against the machine, whether
/// the human or the machine opens, plus the two celebratory
/// boards and the verbatim landing page. one walker carries the
/// memo and visited set across all four seeds, so shared
/// positions are published exactly once.
pub fn publish(out: &Path, templates: &Path) -> anyhow::Result<()> {
    let mut walker = Walker::new();
    let opening = walker.solve(Board::empty(), crate::ROBOT);
    let machine_first = Board::empty().place(opening.x, opening.y, crate::ROBOT);
    log::info!("machine opens with {}", opening);
    log::debug!("machine-first entry:\n{}", machine_first);
    let press = Press::new(out, templates, &machine_first.key())?;
    let mut pages = 0;
    let mut visit = |board: &Board, links: &Links| {
        pages += 1;
        press.publish(board, links)
    };
    walker.traverse(machine_first, &mut visit)?;
    walker.traverse(Board::empty(), &mut visit)?;
    walker.traverse(Board::filled(crate::HUMAN), &mut visit)?;
    walker.traverse(Board::filled(crate::ROBOT), &mut visit)?;
    press.index()?;
    log::info!(
        "published {} pages from {} solved positions into {}",
        pages,
        walker.solved(),
        out.display()
    );
    Ok(())
}
