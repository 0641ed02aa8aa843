//! Error types for the simulation.

use crate::species::WaterRule;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejections surfaced to the user. All of these are local and recoverable;
/// the grid is left unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("cannot plant on water")]
    WrongTerrain,

    #[error("cell already has a plant")]
    CellOccupied,

    #[error("cannot plant {species} here: needs water {rule}")]
    DistanceRuleUnmet { species: String, rule: WaterRule },
}
