//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Farm simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmConfig {
    /// Side length of the square grid
    pub grid_size: i32,
    /// Probability that a generated cell is water (0.0 to 1.0)
    pub water_probability: f32,
    /// Growth added per tick while the watering condition holds
    pub growth_per_tick: f32,
    /// Ticks a dead plant stays on its cell before being swept
    pub grace_ticks: u64,
    /// Random seed for reproducible grid generation
    pub seed: u64,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            water_probability: 0.15,
            growth_per_tick: 0.05, // ~20 ticks to full growth
            grace_ticks: 3,
            seed: 0,
        }
    }
}
