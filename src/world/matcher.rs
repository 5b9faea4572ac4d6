//! Attribute matching: which world objects fit a description

use crate::core::types::{Coordinate, ObjectId};
use crate::parse::{Descriptor, Object};
use crate::world::objects::ObjectWithCoord;
use crate::world::state::{ObjectDefinition, WorldState};

/// Lookups the interpreter needs from the world
pub trait AttributeMatcher {
    /// Ids of every defined object whose form, size and colour fit `descriptor`
    fn find_matching_ids(&self, descriptor: &Descriptor, world: &WorldState) -> Vec<ObjectId>;

    /// Whether `object` describes the floor
    fn is_floor(&self, object: &Object) -> bool;

    fn coordinate_of(&self, id: &ObjectId, world: &WorldState) -> Option<Coordinate>;

    /// Objects in stack `stack` at heights `from..to` that fit `descriptor`
    fn objects_in_stack_range(
        &self,
        stack: usize,
        from: usize,
        to: usize,
        world: &WorldState,
        descriptor: &Descriptor,
    ) -> Vec<ObjectWithCoord>;
}

/// Matches on form (with the `anyform` wildcard), size and colour;
/// unspecified size or colour matches anything
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorMatcher;

impl DescriptorMatcher {
    pub fn new() -> Self {
        Self
    }

    fn fits(descriptor: &Descriptor, definition: &ObjectDefinition) -> bool {
        descriptor.form.admits(definition.form)
            && descriptor.size.map_or(true, |size| definition.size == Some(size))
            && descriptor.color.map_or(true, |color| definition.color == Some(color))
    }
}

impl AttributeMatcher for DescriptorMatcher {
    fn find_matching_ids(&self, descriptor: &Descriptor, world: &WorldState) -> Vec<ObjectId> {
        world
            .objects
            .iter()
            .filter(|(_, definition)| Self::fits(descriptor, definition))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn is_floor(&self, object: &Object) -> bool {
        object.descriptor().is_floor()
    }

    fn coordinate_of(&self, id: &ObjectId, world: &WorldState) -> Option<Coordinate> {
        world.coordinate_of(id)
    }

    fn objects_in_stack_range(
        &self,
        stack: usize,
        from: usize,
        to: usize,
        world: &WorldState,
        descriptor: &Descriptor,
    ) -> Vec<ObjectWithCoord> {
        let Some(ids) = world.stacks.get(stack) else {
            return Vec::new();
        };
        let to = to.min(ids.len());
        if from >= to {
            return Vec::new();
        }

        ids[from..to]
            .iter()
            .enumerate()
            .filter_map(|(offset, id)| {
                let definition = world.objects.get(id)?;
                Self::fits(descriptor, definition).then(|| {
                    ObjectWithCoord::new(
                        id.clone(),
                        definition,
                        Some(Coordinate::new(stack, from + offset)),
                    )
                })
            })
            .collect()
    }
}
