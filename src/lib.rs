pub mod game;
pub mod site;
pub mod solver;

use game::symbol::Symbol;

/// Game-theoretic value of a move from the mover's perspective:
/// +1 guaranteed win, 0 draw under perfect opposition, -1 guaranteed loss.
pub type Value = i8;

/// The mark the human plays. To move on every published position.
pub const HUMAN: Symbol = Symbol::X;
/// The mark the machine plays. Its replies are always solver-optimal.
pub const ROBOT: Symbol = Symbol::O;

/// Initialize terminal logging for the publish binary.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
