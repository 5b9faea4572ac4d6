//! World snapshot: stacks of objects on a floor plus the arm

use crate::core::error::{InterpretError, Result};
use crate::core::types::{Color, Coordinate, Form, ObjectId, Size};
use crate::world::objects::ObjectWithCoord;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static attributes of a world object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    pub form: Form,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub color: Option<Color>,
}

impl ObjectDefinition {
    pub fn new(form: Form, size: Size, color: Color) -> Self {
        Self {
            form,
            size: Some(size),
            color: Some(color),
        }
    }
}

/// Read-only snapshot the interpreter works against
///
/// Stacks are listed left to right, each from the bottom up. Coordinates are
/// never stored; they are recomputed from `stacks` on every lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub stacks: Vec<Vec<ObjectId>>,
    /// Object currently in the arm's grip
    #[serde(default)]
    pub holding: Option<ObjectId>,
    /// Stack index the arm is above
    #[serde(default)]
    pub arm: usize,
    pub objects: BTreeMap<ObjectId, ObjectDefinition>,
    /// Sample utterances shipped with bundled worlds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl WorldState {
    pub fn new(stacks: Vec<Vec<ObjectId>>, objects: BTreeMap<ObjectId, ObjectDefinition>) -> Self {
        Self {
            stacks,
            holding: None,
            arm: 0,
            objects,
            examples: Vec::new(),
        }
    }

    pub fn with_holding(mut self, id: impl Into<ObjectId>) -> Self {
        self.holding = Some(id.into());
        self
    }

    /// Number of stacks (including empty ones)
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Height of stack `x`, 0 for empty or missing stacks
    pub fn stack_height(&self, x: usize) -> usize {
        self.stacks.get(x).map_or(0, Vec::len)
    }

    pub fn definition(&self, id: &ObjectId) -> Result<&ObjectDefinition> {
        self.objects
            .get(id)
            .ok_or_else(|| InterpretError::UnknownObject(id.clone()))
    }

    /// Position of `id` in the stacks; `None` if held or not in the world
    pub fn coordinate_of(&self, id: &ObjectId) -> Option<Coordinate> {
        self.stacks.iter().enumerate().find_map(|(x, stack)| {
            stack
                .iter()
                .position(|placed| placed == id)
                .map(|y| Coordinate::new(x, y))
        })
    }

    pub fn is_held(&self, id: &ObjectId) -> bool {
        self.holding.as_ref() == Some(id)
    }

    /// The held object, without a coordinate
    pub fn held_object(&self) -> Result<Option<ObjectWithCoord>> {
        let Some(id) = &self.holding else {
            return Ok(None);
        };
        let definition = self.definition(id)?;
        Ok(Some(ObjectWithCoord::new(id.clone(), definition, None)))
    }

    /// Check that every placed object is defined and appears exactly once
    ///
    /// Definitions that are neither stacked nor held are allowed; such objects
    /// are simply not in the scene.
    pub fn validate(&self) -> Result<()> {
        let mut seen: AHashSet<&ObjectId> = AHashSet::new();

        let placed = self.stacks.iter().flatten().chain(self.holding.iter());
        for id in placed {
            if id.as_str() == crate::core::types::FLOOR_ID {
                return Err(InterpretError::InvalidWorld(
                    "\"floor\" is reserved and cannot be placed".into(),
                ));
            }
            if !self.objects.contains_key(id) {
                return Err(InterpretError::InvalidWorld(format!(
                    "object {} is placed but has no definition",
                    id
                )));
            }
            if !seen.insert(id) {
                return Err(InterpretError::InvalidWorld(format!(
                    "object {} appears more than once",
                    id
                )));
            }
        }

        if let Some((id, _)) = self
            .objects
            .iter()
            .find(|(_, definition)| matches!(definition.form, Form::Floor | Form::AnyForm))
        {
            return Err(InterpretError::InvalidWorld(format!(
                "object {} has a form reserved for descriptions",
                id
            )));
        }

        if !self.stacks.is_empty() && self.arm >= self.stacks.len() {
            return Err(InterpretError::InvalidWorld(format!(
                "arm position {} is outside {} stacks",
                self.arm,
                self.stacks.len()
            )));
        }

        Ok(())
    }
}
