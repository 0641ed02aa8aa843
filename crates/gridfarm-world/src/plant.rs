//! Plant instance state and lifecycle.

use gridfarm_core::{PlantId, PlantSpecies, SizeClass};
use serde::{Deserialize, Serialize};

/// A planted instance of a species.
///
/// Growth is monotone while alive and frozen forever once the plant dies.
/// Death records the tick it happened on so the simulation can sweep the
/// plant after the grace delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub species: PlantSpecies,
    pub growth_stage: f32,
    pub alive: bool,
    pub died_at: Option<u64>,
}

impl Plant {
    pub fn new(species: PlantSpecies) -> Self {
        Self {
            id: PlantId::new(),
            species,
            growth_stage: 0.0,
            alive: true,
            died_at: None,
        }
    }

    /// Advance growth by `amount`, clamped to full growth. Dead plants do
    /// not grow.
    pub fn grow(&mut self, amount: f32) {
        if self.alive {
            self.growth_stage = (self.growth_stage + amount).min(1.0);
        }
    }

    /// Kill the plant at the given tick. Irreversible; growth is frozen at
    /// its current value. A second kill keeps the original death tick.
    pub fn kill(&mut self, tick: u64) {
        if self.alive {
            self.alive = false;
            self.died_at = Some(tick);
        }
    }

    pub fn is_fully_grown(&self) -> bool {
        self.growth_stage >= 1.0
    }

    pub fn size_class(&self) -> SizeClass {
        SizeClass::from_growth(self.growth_stage)
    }

    /// Whether the grace delay since death has elapsed at tick `now`
    pub fn due_for_sweep(&self, now: u64, grace_ticks: u64) -> bool {
        match self.died_at {
            Some(died) => !self.alive && now.saturating_sub(died) >= grace_ticks,
            None => false,
        }
    }
}
