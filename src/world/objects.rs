//! Objects paired with their position in the stacks

use crate::core::types::{Color, Coordinate, Form, ObjectId, Size};
use crate::world::state::ObjectDefinition;
use serde::{Deserialize, Serialize};

/// A world object with its identifier and (when stacked) its coordinate
///
/// `coord` is absent for the held object and for the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectWithCoord {
    pub id: ObjectId,
    pub form: Form,
    pub size: Option<Size>,
    pub color: Option<Color>,
    pub coord: Option<Coordinate>,
}

impl ObjectWithCoord {
    pub fn new(id: ObjectId, definition: &ObjectDefinition, coord: Option<Coordinate>) -> Self {
        Self {
            id,
            form: definition.form,
            size: definition.size,
            color: definition.color,
            coord,
        }
    }

    /// The synthetic floor object
    pub fn floor() -> Self {
        Self {
            id: ObjectId::floor(),
            form: Form::Floor,
            size: None,
            color: None,
            coord: None,
        }
    }

    pub fn is_floor(&self) -> bool {
        self.form == Form::Floor
    }
}

/// Remove later entries whose id was already seen, keeping first-occurrence order
pub fn dedup_by_id(objects: Vec<ObjectWithCoord>) -> Vec<ObjectWithCoord> {
    let mut seen = ahash::AHashSet::new();
    objects
        .into_iter()
        .filter(|object| seen.insert(object.id.clone()))
        .collect()
}
