//! 2D terrain grid for the farm.

use gridfarm_core::{FarmConfig, Position, Terrain};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A bounded square grid of land and water cells.
///
/// The water index is maintained synchronously with the terrain, so
/// `water_cells()` is always exactly the set of water positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
    terrain: Vec<Terrain>,
    water: HashSet<Position>,
}

impl Grid {
    /// Create an all-land grid
    pub fn new(size: i32) -> Self {
        let count = (size * size) as usize;
        Self {
            size,
            terrain: vec![Terrain::Land; count],
            water: HashSet::new(),
        }
    }

    /// Create a grid from farm configuration, rolling each cell independently
    pub fn from_config(config: &FarmConfig, rng: &mut ChaCha8Rng) -> Self {
        let mut grid = Self::new(config.grid_size);

        for y in 0..config.grid_size {
            for x in 0..config.grid_size {
                if rng.gen::<f32>() < config.water_probability {
                    grid.set_terrain(Position::new(x, y), Terrain::Water);
                }
            }
        }

        grid
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// Terrain at a position; caller must ensure the position is on the grid
    pub fn terrain(&self, pos: Position) -> Terrain {
        self.terrain[self.pos_to_index(pos)]
    }

    /// Set terrain at a position, keeping the water index exact
    pub fn set_terrain(&mut self, pos: Position, terrain: Terrain) {
        let index = self.pos_to_index(pos);
        self.terrain[index] = terrain;

        match terrain {
            Terrain::Water => {
                self.water.insert(pos);
            }
            Terrain::Land => {
                self.water.remove(&pos);
            }
        }
    }

    pub fn water_cells(&self) -> &HashSet<Position> {
        &self.water
    }

    pub fn has_water(&self) -> bool {
        !self.water.is_empty()
    }

    /// Manhattan distance to the nearest water cell, or `None` if the grid
    /// has no water at all
    pub fn nearest_water_distance(&self, pos: Position) -> Option<i32> {
        self.water
            .iter()
            .map(|w| pos.manhattan_distance(w))
            .min()
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        (pos.y * self.size + pos.x) as usize
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.size;
        let y = (index as i32) / self.size;
        Position::new(x, y)
    }

    /// Iterator over all positions
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.terrain.len()).map(move |i| self.index_to_pos(i))
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, Terrain)> + '_ {
        self.terrain
            .iter()
            .enumerate()
            .map(move |(i, &t)| (self.index_to_pos(i), t))
    }
}
