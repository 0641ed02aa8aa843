//! Simulation context driving plant placement, growth, and death.

use crate::grid::Grid;
use crate::plant::Plant;
use gridfarm_core::{Error, FarmConfig, PlantId, PlantSpecies, Position, Result, Terrain};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use tracing::{debug, info};

/// A running farm simulation.
///
/// The caller owns the instance and drives it explicitly: `start()`, then
/// one `tick()` per time unit. All mutation is synchronous; there is no
/// internal timer. Plants live in a position-keyed map, so a plant can only
/// ever occupy a land cell (water placement removes any plant first).
pub struct Simulation {
    grid: Grid,
    plants: HashMap<Position, Plant>,
    config: FarmConfig,
    tick: u64,
    running: bool,
}

impl Simulation {
    /// Create a simulation with a freshly generated grid. Starts stopped;
    /// call `start()` before ticking.
    pub fn new(config: FarmConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = Grid::from_config(&config, &mut rng);

        Self {
            grid,
            plants: HashMap::new(),
            config,
            tick: 0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn now(&self) -> u64 {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &FarmConfig {
        &self.config
    }

    pub fn plant_at(&self, pos: Position) -> Option<&Plant> {
        self.plants.get(&pos)
    }

    /// Iterator over all plants with their positions
    pub fn plants(&self) -> impl Iterator<Item = (Position, &Plant)> + '_ {
        self.plants.iter().map(|(&pos, plant)| (pos, plant))
    }

    /// Whether the species' watering condition holds at this position.
    ///
    /// With no water anywhere on the grid the distance is undefined and only
    /// drought-hardy species qualify. This special case is intentional and
    /// not derived from the distance rule.
    pub fn can_plant(&self, pos: Position, species: &PlantSpecies) -> bool {
        Self::watering_satisfied(&self.grid, pos, species)
    }

    fn watering_satisfied(grid: &Grid, pos: Position, species: &PlantSpecies) -> bool {
        match grid.nearest_water_distance(pos) {
            Some(distance) => species.water_rule.accepts(distance),
            None => species.drought_hardy,
        }
    }

    /// Place a new plant of `species` at `pos`.
    ///
    /// Rejected when the cell is off-grid, water, occupied, or the distance
    /// rule is unmet. The grid is unchanged on rejection.
    pub fn plant(&mut self, pos: Position, species: PlantSpecies) -> Result<PlantId> {
        if !self.grid.contains(pos) {
            return Err(Error::OutOfBounds { x: pos.x, y: pos.y });
        }
        if self.grid.terrain(pos) == Terrain::Water {
            return Err(Error::WrongTerrain);
        }
        if self.plants.contains_key(&pos) {
            return Err(Error::CellOccupied);
        }
        if !self.can_plant(pos, &species) {
            return Err(Error::DistanceRuleUnmet {
                species: species.name.clone(),
                rule: species.water_rule,
            });
        }

        let plant = Plant::new(species);
        let id = plant.id;
        info!(
            event = "plant_placed",
            species = %plant.species.name,
            x = pos.x,
            y = pos.y,
            tick = self.tick,
            "Plant placed"
        );
        self.plants.insert(pos, plant);
        Ok(id)
    }

    /// Detach the plant at `pos`, if any. Safe to call on water, empty, or
    /// off-grid cells; calling it twice is a no-op the second time.
    pub fn remove_plant(&mut self, pos: Position) -> Option<Plant> {
        let plant = self.plants.remove(&pos);
        if let Some(ref plant) = plant {
            debug!(
                event = "plant_removed",
                species = %plant.species.name,
                x = pos.x,
                y = pos.y,
                tick = self.tick,
                "Plant removed"
            );
        }
        plant
    }

    /// Set terrain at `pos`. Converting a cell to water destroys any plant
    /// on it. Off-grid positions are ignored. Plants elsewhere are
    /// re-evaluated against the new water layout on the next `tick()`.
    pub fn set_terrain(&mut self, pos: Position, terrain: Terrain) {
        if !self.grid.contains(pos) {
            return;
        }

        if terrain == Terrain::Water {
            if let Some(plant) = self.plants.remove(&pos) {
                debug!(
                    event = "plant_flooded",
                    species = %plant.species.name,
                    x = pos.x,
                    y = pos.y,
                    tick = self.tick,
                    "Plant destroyed by flooding"
                );
            }
        }

        self.grid.set_terrain(pos, terrain);
    }

    /// Flip a cell between land and water (the bucket tool). Returns the new
    /// terrain, or `None` for an off-grid position.
    pub fn toggle_terrain(&mut self, pos: Position) -> Option<Terrain> {
        if !self.grid.contains(pos) {
            return None;
        }
        let next = self.grid.terrain(pos).toggled();
        self.set_terrain(pos, next);
        Some(next)
    }

    /// Advance one time unit: grow or kill every plant against the current
    /// water layout, then sweep dead plants whose grace delay has elapsed.
    /// No-op while stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        self.tick += 1;
        let now = self.tick;

        let grid = &self.grid;
        for (&pos, plant) in self.plants.iter_mut() {
            if !plant.alive {
                continue;
            }
            if Self::watering_satisfied(grid, pos, &plant.species) {
                plant.grow(self.config.growth_per_tick);
            } else {
                plant.kill(now);
                info!(
                    event = "plant_died",
                    species = %plant.species.name,
                    x = pos.x,
                    y = pos.y,
                    growth_stage = plant.growth_stage,
                    tick = now,
                    "Plant died: watering condition no longer holds"
                );
            }
        }

        self.sweep_dead_plants(now);
    }

    fn sweep_dead_plants(&mut self, now: u64) {
        let due: Vec<Position> = self
            .plants
            .iter()
            .filter(|(_, plant)| plant.due_for_sweep(now, self.config.grace_ticks))
            .map(|(&pos, _)| pos)
            .collect();

        for pos in due {
            if let Some(plant) = self.plants.remove(&pos) {
                debug!(
                    event = "plant_swept",
                    species = %plant.species.name,
                    x = pos.x,
                    y = pos.y,
                    died_at = plant.died_at,
                    tick = now,
                    "Dead plant swept from its cell"
                );
            }
        }
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use gridfarm_core::{PlantId, SpeciesKind};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Plant(i32, i32, SpeciesKind),
        Shovel(i32, i32),
        Bucket(i32, i32),
        Tick,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let kind = prop_oneof![
            Just(SpeciesKind::Marsh),
            Just(SpeciesKind::Potato),
            Just(SpeciesKind::Cactus),
        ];
        prop_oneof![
            (0..8i32, 0..8i32, kind).prop_map(|(x, y, k)| Op::Plant(x, y, k)),
            (0..8i32, 0..8i32).prop_map(|(x, y)| Op::Shovel(x, y)),
            (0..8i32, 0..8i32).prop_map(|(x, y)| Op::Bucket(x, y)),
            Just(Op::Tick),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Under any interleaving of user actions and ticks: plants occupy
        /// only land cells, growth never decreases for a surviving plant,
        /// and a dead plant stays dead with its growth frozen.
        #[test]
        fn invariants_hold_under_random_actions(
            ops in proptest::collection::vec(op_strategy(), 1..80)
        ) {
            let config = FarmConfig {
                water_probability: 0.0,
                ..Default::default()
            };
            let mut sim = Simulation::new(config);
            sim.set_terrain(Position::new(3, 3), Terrain::Water);
            sim.start();

            let mut previous: std::collections::HashMap<Position, (PlantId, f32, bool)> =
                std::collections::HashMap::new();

            for op in ops {
                match op {
                    Op::Plant(x, y, kind) => {
                        let _ = sim.plant(Position::new(x, y), kind.species());
                    }
                    Op::Shovel(x, y) => {
                        sim.remove_plant(Position::new(x, y));
                    }
                    Op::Bucket(x, y) => {
                        sim.toggle_terrain(Position::new(x, y));
                    }
                    Op::Tick => sim.tick(),
                }

                for (pos, plant) in sim.plants() {
                    prop_assert_eq!(sim.grid().terrain(pos), Terrain::Land);

                    if let Some(&(id, stage, alive)) = previous.get(&pos) {
                        if id == plant.id {
                            prop_assert!(plant.growth_stage >= stage);
                            if !alive {
                                prop_assert!(!plant.alive);
                                prop_assert_eq!(plant.growth_stage, stage);
                            }
                        }
                    }
                }

                previous = sim
                    .plants()
                    .map(|(pos, plant)| (pos, (plant.id, plant.growth_stage, plant.alive)))
                    .collect();
            }
        }
    }
}
