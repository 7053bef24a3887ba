use crate::game::board::Board;
use crate::game::symbol::Symbol;

/// board geometry, in px
const MARGIN: u32 = 32;
const SYMBOL_SIZE: u32 = 100;
const GRID_STROKE: u32 = 4;
const SYMBOL_STROKE: u32 = 6;
/// distance between the top-left corners of adjacent cells
const PITCH: u32 = MARGIN + SYMBOL_SIZE + MARGIN + GRID_STROKE;
const TOTAL_SIZE: u32 = PITCH * 3 - GRID_STROKE;

/// palette
const COLOR_X: &str = "#C60000";
const COLOR_O: &str = "#12C600";
const COLOR_GRID: &str = "#000";
const COLOR_LINK: &str = "#00E";

/// reusable symbol geometry, anchored at the cell's top-left corner
const PATH_X: &str =
    const_format::formatcp!("m 0 0 l {s} {s} m 0 -{s} l -{s} {s}", s = SYMBOL_SIZE);
const PATH_O: &str = const_format::formatcp!(
    "m {h} 0 a {h} {h} 0 0 0 0 {s} a {h} {h} 0 0 0 0 -{s}",
    h = SYMBOL_SIZE / 2,
    s = SYMBOL_SIZE
);
const PATH_GRID: &str = const_format::formatcp!(
    "M {c} 0 v {t} m {p} 0 v -{t} M 0 {c} h {t} m 0 {p} h -{t}",
    c = PITCH - GRID_STROKE / 2,
    p = PITCH,
    t = TOTAL_SIZE
);

/// a board drawn as a standalone SVG document. every empty cell
/// is an anchored placeholder pointing at its href, so the graphic
/// itself is the page's navigation.
pub struct Scene<'a> {
    board: &'a Board,
    hrefs: &'a [String; 9],
}

impl<'a> Scene<'a> {
    pub fn new(board: &'a Board, hrefs: &'a [String; 9]) -> Self {
        Self { board, hrefs }
    }

    fn corner(x: usize, y: usize) -> (u32, u32) {
        (PITCH * x as u32 + MARGIN, PITCH * y as u32 + MARGIN)
    }
}

impl std::fmt::Display for Scene<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{t}" height="{t}">"#,
            t = TOTAL_SIZE
        )?;
        writeln!(f, "  <defs>")?;
        if self.board.contains(Symbol::X) {
            writeln!(
                f,
                r#"    <path id="X" d="{PATH_X}" stroke="{COLOR_X}" stroke-width="{SYMBOL_STROKE}" fill="none" stroke-linecap="round"/>"#
            )?;
        }
        if self.board.contains(Symbol::O) {
            writeln!(
                f,
                r#"    <path id="O" d="{PATH_O}" stroke="{COLOR_O}" stroke-width="{SYMBOL_STROKE}" fill="none" stroke-linecap="round"/>"#
            )?;
        }
        writeln!(
            f,
            r#"    <rect id="P" width="{s}" height="{s}" fill="{COLOR_LINK}"/>"#,
            s = SYMBOL_SIZE
        )?;
        writeln!(f, "  </defs>")?;
        writeln!(
            f,
            r#"  <rect width="{t}" height="{t}" fill="white"/>"#,
            t = TOTAL_SIZE
        )?;
        writeln!(
            f,
            r#"  <path d="{PATH_GRID}" stroke="{COLOR_GRID}" stroke-width="{GRID_STROKE}" fill="none" stroke-linecap="round"/>"#
        )?;
        for y in 0..3 {
            for x in 0..3 {
                let (cx, cy) = Self::corner(x, y);
                match self.board.get(x, y) {
                    Some(symbol) => {
                        writeln!(f, r##"  <use xlink:href="#{symbol}" x="{cx}" y="{cy}"/>"##)?
                    }
                    None => writeln!(
                        f,
                        r##"  <a xlink:href="{href}"><use xlink:href="#P" x="{cx}" y="{cy}"/></a>"##,
                        href = self.hrefs[y * 3 + x]
                    )?,
                }
            }
        }
        write!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dead_ends() -> [String; 9] {
        std::array::from_fn(|_| String::from("#"))
    }

    #[test]
    fn defs_track_marks_on_board() {
        let board = Board::from("xnnnnnnnn");
        let scene = Scene::new(&board, &dead_ends()).to_string();
        assert!(scene.contains(r#"id="X""#));
        assert!(!scene.contains(r#"id="O""#));
    }

    #[test]
    fn one_anchor_per_open_cell() {
        let board = Board::from("xonnnnnnn");
        let scene = Scene::new(&board, &dead_ends()).to_string();
        assert!(scene.matches("<a ").count() == 7);
        assert!(scene.matches("<use ").count() == 9);
    }

    #[test]
    fn anchors_carry_their_targets() {
        let board = Board::empty();
        let mut hrefs = dead_ends();
        hrefs[4] = String::from("xnnnonnnn.html");
        let scene = Scene::new(&board, &hrefs).to_string();
        assert!(scene.contains(r#"xlink:href="xnnnonnnn.html""#));
    }

    #[test]
    fn grid_spans_the_canvas() {
        let board = Board::empty();
        let scene = Scene::new(&board, &dead_ends()).to_string();
        assert!(scene.contains(r#"width="500" height="500""#));
    }
}
