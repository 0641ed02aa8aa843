//! Tool selection and click handling for a UI collaborator.
//!
//! The UI feeds user intents in (`select_tool`, `cell_clicked`) and renders
//! from the `CellInfo` views it gets back. Rendering itself lives outside
//! this crate.

use crate::simulation::Simulation;
use gridfarm_core::{Error, PlantId, Position, SizeClass, SpeciesKind, Terrain};
use std::fmt;

/// Closed set of tools the UI can select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Cursor,
    Shovel,
    Seeds(SpeciesKind),
    Bucket,
}

/// What a click did. `Rejected` is the only outcome the UI presents as a
/// blocking notice; `Ignored` covers harmless no-ops like shoveling water.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Inspected(CellInfo),
    Planted(PlantId),
    PlantRemoved,
    TerrainChanged(Terrain),
    Rejected(Error),
    Ignored,
}

/// Snapshot of one cell for rendering and for the cell-info panel
#[derive(Debug, Clone, PartialEq)]
pub struct CellInfo {
    pub position: Position,
    pub terrain: Terrain,
    pub plant: Option<PlantInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlantInfo {
    pub name: String,
    pub emoji: char,
    pub growth_percent: u32,
    pub size_class: SizeClass,
    pub alive: bool,
}

impl fmt::Display for CellInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "terrain: {}", self.terrain.label())?;
        writeln!(f, "coordinates: {}", self.position)?;
        match &self.plant {
            Some(plant) => {
                writeln!(f, "plant: {}", plant.name)?;
                writeln!(f, "growth: {}%", plant.growth_percent)?;
                write!(f, "state: {}", if plant.alive { "alive" } else { "dead" })
            }
            None => write!(f, "plant: none"),
        }
    }
}

/// An interactive session: a simulation plus the currently selected tool
pub struct Session {
    sim: Simulation,
    tool: Tool,
}

impl Session {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            tool: Tool::Cursor,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn selected_tool(&self) -> Tool {
        self.tool
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Apply the selected tool to the clicked cell
    pub fn cell_clicked(&mut self, x: i32, y: i32) -> Outcome {
        let pos = Position::new(x, y);
        if !self.sim.grid().contains(pos) {
            return Outcome::Ignored;
        }

        match self.tool {
            Tool::Cursor => match self.cell_info(x, y) {
                Some(info) => Outcome::Inspected(info),
                None => Outcome::Ignored,
            },
            Tool::Shovel => match self.sim.remove_plant(pos) {
                Some(_) => Outcome::PlantRemoved,
                None => Outcome::Ignored,
            },
            Tool::Seeds(kind) => match self.sim.plant(pos, kind.species()) {
                Ok(id) => Outcome::Planted(id),
                Err(err) => Outcome::Rejected(err),
            },
            Tool::Bucket => match self.sim.toggle_terrain(pos) {
                Some(terrain) => Outcome::TerrainChanged(terrain),
                None => Outcome::Ignored,
            },
        }
    }

    /// Cell snapshot for the info panel, `None` off-grid
    pub fn cell_info(&self, x: i32, y: i32) -> Option<CellInfo> {
        let pos = Position::new(x, y);
        if !self.sim.grid().contains(pos) {
            return None;
        }

        let plant = self.sim.plant_at(pos).map(|plant| PlantInfo {
            name: plant.species.name.clone(),
            emoji: plant.species.emoji,
            growth_percent: (plant.growth_stage * 100.0).round() as u32,
            size_class: plant.size_class(),
            alive: plant.alive,
        });

        Some(CellInfo {
            position: pos,
            terrain: self.sim.grid().terrain(pos),
            plant,
        })
    }

    /// Snapshot of every cell, row-major, for the rendering collaborator
    pub fn cells(&self) -> Vec<CellInfo> {
        self.sim
            .grid()
            .positions()
            .filter_map(|pos| self.cell_info(pos.x, pos.y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfarm_core::FarmConfig;

    fn lake_session() -> Session {
        let config = FarmConfig {
            water_probability: 0.0,
            ..Default::default()
        };
        let mut sim = Simulation::new(config);
        sim.set_terrain(Position::new(3, 3), Terrain::Water);
        sim.start();
        Session::new(sim)
    }

    #[test]
    fn test_tool_selection() {
        let mut session = lake_session();
        assert_eq!(session.selected_tool(), Tool::Cursor);

        session.select_tool(Tool::Seeds(SpeciesKind::Potato));
        assert_eq!(session.selected_tool(), Tool::Seeds(SpeciesKind::Potato));
    }

    #[test]
    fn test_cursor_inspects() {
        let mut session = lake_session();
        let outcome = session.cell_clicked(3, 3);

        match outcome {
            Outcome::Inspected(info) => {
                assert_eq!(info.terrain, Terrain::Water);
                assert!(info.plant.is_none());
            }
            other => panic!("expected Inspected, got {other:?}"),
        }
    }

    #[test]
    fn test_seed_tool_plants_and_rejects() {
        let mut session = lake_session();
        session.select_tool(Tool::Seeds(SpeciesKind::Marsh));

        assert!(matches!(session.cell_clicked(3, 4), Outcome::Planted(_)));

        // Wrong distance: the rejection carries species name and rule
        match session.cell_clicked(5, 5) {
            Outcome::Rejected(err) => {
                let notice = err.to_string();
                assert!(notice.contains("marsh"));
                assert!(notice.contains("exactly 1 cells from water"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert!(session.simulation().plant_at(Position::new(5, 5)).is_none());
    }

    #[test]
    fn test_shovel_silent_on_invalid_targets() {
        let mut session = lake_session();
        session.select_tool(Tool::Shovel);

        assert_eq!(session.cell_clicked(3, 3), Outcome::Ignored); // water
        assert_eq!(session.cell_clicked(4, 4), Outcome::Ignored); // empty land
        assert_eq!(session.cell_clicked(-1, 0), Outcome::Ignored); // off-grid

        session.select_tool(Tool::Seeds(SpeciesKind::Marsh));
        session.cell_clicked(3, 4);
        session.select_tool(Tool::Shovel);
        assert_eq!(session.cell_clicked(3, 4), Outcome::PlantRemoved);
        assert_eq!(session.cell_clicked(3, 4), Outcome::Ignored);
    }

    #[test]
    fn test_bucket_toggles_terrain() {
        let mut session = lake_session();
        session.select_tool(Tool::Bucket);

        assert_eq!(
            session.cell_clicked(0, 0),
            Outcome::TerrainChanged(Terrain::Water)
        );
        assert_eq!(
            session.cell_clicked(0, 0),
            Outcome::TerrainChanged(Terrain::Land)
        );
        assert_eq!(session.cell_clicked(100, 100), Outcome::Ignored);
    }

    #[test]
    fn test_cell_info_text() {
        let mut session = lake_session();
        session.select_tool(Tool::Seeds(SpeciesKind::Marsh));
        session.cell_clicked(3, 4);
        for _ in 0..10 {
            session.simulation_mut().tick();
        }

        let info = session.cell_info(3, 4).unwrap();
        let text = info.to_string();
        assert!(text.contains("terrain: land"));
        assert!(text.contains("coordinates: (3, 4)"));
        assert!(text.contains("plant: marsh"));
        assert!(text.contains("growth: 50%"));
        assert!(text.contains("state: alive"));

        let empty = session.cell_info(0, 0).unwrap();
        assert!(empty.to_string().contains("plant: none"));
    }

    #[test]
    fn test_cells_snapshot_covers_grid() {
        let session = lake_session();
        let cells = session.cells();
        assert_eq!(cells.len(), 64);
        assert_eq!(
            cells
                .iter()
                .filter(|c| c.terrain == Terrain::Water)
                .count(),
            1
        );
    }
}
