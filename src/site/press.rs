use super::svg::Scene;
use crate::game::board::Board;
use crate::game::outcome::Outcome;
use crate::solver::walker::Links;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// which template a position is typeset with. won and lost are
/// the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Play,
    Won,
    Lost,
    Draw,
}

impl Kind {
    /// template file stem under the templates directory
    pub fn stem(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Draw => "draw",
        }
    }
}

impl From<Outcome> for Kind {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Undecided => Self::Play,
            Outcome::Draw => Self::Draw,
            Outcome::Win(winner) if winner == crate::HUMAN => Self::Won,
            Outcome::Win(_) => Self::Lost,
        }
    }
}

/// typesets one page per unique position. templates are read
/// once up front; each page gets the board's SVG scene and the
/// machine-first entry link substituted in.
pub struct Press {
    out: PathBuf,
    templates: PathBuf,
    ai_first: String,
    play: String,
    won: String,
    lost: String,
    draw: String,
}

impl Press {
    /// load the four page templates and prepare the output
    /// directory. ai_first is the canonical key of the entry
    /// position where the machine has already opened.
    pub fn new(out: &Path, templates: &Path, ai_first: &str) -> anyhow::Result<Self> {
        std::fs::create_dir_all(out)
            .with_context(|| format!("create output directory {}", out.display()))?;
        Ok(Self {
            out: out.to_path_buf(),
            templates: templates.to_path_buf(),
            ai_first: Self::page(ai_first),
            play: Self::load(templates, Kind::Play)?,
            won: Self::load(templates, Kind::Won)?,
            lost: Self::load(templates, Kind::Lost)?,
            draw: Self::load(templates, Kind::Draw)?,
        })
    }

    /// page file name for a canonical board key
    pub fn page(key: &str) -> String {
        format!("{}.html", key)
    }

    fn load(templates: &Path, kind: Kind) -> anyhow::Result<String> {
        let path = templates.join(Self::page(kind.stem()));
        std::fs::read_to_string(&path)
            .with_context(|| format!("read template {}", path.display()))
    }

    fn template(&self, kind: Kind) -> &str {
        match kind {
            Kind::Play => &self.play,
            Kind::Won => &self.won,
            Kind::Lost => &self.lost,
            Kind::Draw => &self.draw,
        }
    }

    /// typeset one unique position and write its page. open cells
    /// resolve to their successor's page, or to a dead "#" anchor
    /// on finished boards.
    pub fn publish(&self, board: &Board, links: &Links) -> anyhow::Result<()> {
        let hrefs: [String; 9] = std::array::from_fn(|i| {
            links[i]
                .as_ref()
                .map(|key| Self::page(key))
                .unwrap_or_else(|| String::from("#"))
        });
        let kind = Kind::from(Outcome::from(*board));
        let page = self
            .template(kind)
            .replace("{game_svg}", &Scene::new(board, &hrefs).to_string())
            .replace("{ai_first}", &self.ai_first);
        let path = self.out.join(Self::page(&board.key()));
        log::debug!("publishing {}", path.display());
        std::fs::write(&path, page).with_context(|| format!("write page {}", path.display()))
    }

    /// the landing page carries no substitutions; it ships verbatim
    pub fn index(&self) -> anyhow::Result<()> {
        let from = self.templates.join("index.html");
        let to = self.out.join("index.html");
        std::fs::copy(&from, &to)
            .map(|_| ())
            .with_context(|| format!("copy {} to {}", from.display(), to.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::symbol::Symbol;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("roboxo-press").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn templates() -> PathBuf {
        let dir = scratch("templates");
        for stem in ["play", "won", "lost", "draw", "index"] {
            std::fs::write(
                dir.join(format!("{}.html", stem)),
                "<body>{game_svg}<a href=\"{ai_first}\">machine first</a></body>",
            )
            .unwrap();
        }
        dir
    }

    #[test]
    fn substitutes_and_writes() {
        let out = scratch("out");
        let press = Press::new(&out, &templates(), "onnnnnnnn").unwrap();
        let links: Links = std::array::from_fn(|_| None);
        press.publish(&Board::empty(), &links).unwrap();
        let page = std::fs::read_to_string(out.join("nnnnnnnnn.html")).unwrap();
        assert!(page.contains("<svg"));
        assert!(page.contains("onnnnnnnn.html"));
        assert!(!page.contains("{game_svg}"));
        assert!(!page.contains("{ai_first}"));
    }

    #[test]
    fn classifies_for_the_human() {
        assert!(Kind::from(Outcome::Win(Symbol::X)) == Kind::Won);
        assert!(Kind::from(Outcome::Win(Symbol::O)) == Kind::Lost);
        assert!(Kind::from(Outcome::Draw) == Kind::Draw);
        assert!(Kind::from(Outcome::Undecided) == Kind::Play);
    }
}
