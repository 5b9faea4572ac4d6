//! Load world snapshots from JSON files
//!
//! The format is the one the front end keeps its worlds in:
//! `{"stacks": [["e"], ["g", "l"]], "holding": null, "arm": 0,
//!   "objects": {"e": {"form": "ball", "size": "large", "color": "white"}, ...}}`

use crate::core::error::Result;
use crate::world::state::WorldState;
use std::path::Path;

pub struct WorldLoader;

impl WorldLoader {
    /// Load and validate a world from a JSON string
    pub fn load_from_json(json: &str) -> Result<WorldState> {
        let world: WorldState = serde_json::from_str(json)?;
        world.validate()?;
        tracing::debug!(
            stacks = world.stack_count(),
            objects = world.objects.len(),
            holding = ?world.holding,
            "Loaded world"
        );
        Ok(world)
    }

    /// Load and validate a world from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<WorldState> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_json(&content)
    }
}
