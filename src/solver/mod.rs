pub mod decision;
pub mod solver;
pub mod walker;
