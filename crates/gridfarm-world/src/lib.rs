//! Farm simulation engine.
//!
//! This crate implements the grid world where water shapes where plants may
//! be planted and whether they grow or die, plus the tool/session boundary a
//! UI drives it through.

pub mod grid;
pub mod plant;
pub mod simulation;
pub mod session;

pub use grid::Grid;
pub use plant::Plant;
pub use simulation::Simulation;
pub use session::{CellInfo, Outcome, PlantInfo, Session, Tool};
