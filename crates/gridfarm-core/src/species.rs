//! Plant species definitions and water-distance rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How far from the nearest water cell a species must be planted.
///
/// Distances are Manhattan distances to the nearest water cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterRule {
    /// Legal only at exactly this distance
    Exact(i32),
    /// Legal anywhere in the inclusive range
    Range { min: i32, max: i32 },
}

impl WaterRule {
    /// Whether a distance to the nearest water cell satisfies this rule
    pub fn accepts(&self, distance: i32) -> bool {
        match *self {
            WaterRule::Exact(d) => distance == d,
            WaterRule::Range { min, max } => distance >= min && distance <= max,
        }
    }
}

impl fmt::Display for WaterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            WaterRule::Exact(d) => write!(f, "exactly {d} cells from water"),
            WaterRule::Range { min, max } => write!(f, "{min} to {max} cells from water"),
        }
    }
}

/// Immutable definition of a plantable species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantSpecies {
    pub name: String,
    pub emoji: char,
    pub water_rule: WaterRule,
    /// Plantable even when the grid has no water at all.
    ///
    /// This is deliberately a separate flag rather than something derived
    /// from the distance rule: with no water on the grid the distance is
    /// undefined, and only species marked drought-hardy may be planted.
    pub drought_hardy: bool,
}

impl PlantSpecies {
    pub fn marsh() -> Self {
        Self {
            name: "marsh".to_string(),
            emoji: '🌿',
            water_rule: WaterRule::Exact(1),
            drought_hardy: false,
        }
    }

    pub fn potato() -> Self {
        Self {
            name: "potato".to_string(),
            emoji: '🥔',
            water_rule: WaterRule::Range { min: 2, max: 3 },
            drought_hardy: false,
        }
    }

    pub fn cactus() -> Self {
        Self {
            name: "cactus".to_string(),
            emoji: '🌵',
            water_rule: WaterRule::Range { min: 4, max: 100 },
            drought_hardy: true,
        }
    }
}

/// Closed set of seed kinds offered by the seed tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeciesKind {
    Marsh,
    Potato,
    Cactus,
}

impl SpeciesKind {
    pub fn species(&self) -> PlantSpecies {
        match self {
            SpeciesKind::Marsh => PlantSpecies::marsh(),
            SpeciesKind::Potato => PlantSpecies::potato(),
            SpeciesKind::Cactus => PlantSpecies::cactus(),
        }
    }

    pub fn all() -> [SpeciesKind; 3] {
        [SpeciesKind::Marsh, SpeciesKind::Potato, SpeciesKind::Cactus]
    }
}
