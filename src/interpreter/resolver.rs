//! Entity resolution - maps a (possibly nested) description to world objects
//!
//! "the ball in a box on the floor" is resolved inside out: first the floor,
//! then the boxes on it, then the balls inside those boxes.

use crate::core::error::{InterpretError, Result};
use crate::interpreter::spatial::SpatialMatcher;
use crate::parse::{Descriptor, Entity, Object};
use crate::world::{AttributeMatcher, ObjectWithCoord, WorldState};

/// Resolves entity descriptions against a world snapshot
pub struct EntityResolver<'a> {
    world: &'a WorldState,
    matcher: &'a dyn AttributeMatcher,
    spatial: SpatialMatcher<'a>,
}

impl<'a> EntityResolver<'a> {
    pub fn new(world: &'a WorldState, matcher: &'a dyn AttributeMatcher) -> Self {
        Self {
            world,
            matcher,
            spatial: SpatialMatcher::new(world, matcher),
        }
    }

    /// Every object `entity` can denote. May contain repeated ids when several
    /// references lead to the same object; callers de-duplicate.
    ///
    /// An empty result means nothing in the world fits. Asking for something
    /// in relation to the floor's own position fails with `UnsupportedRelation`.
    pub fn resolve(&self, entity: &Entity) -> Result<Vec<ObjectWithCoord>> {
        self.resolve_object(&entity.obj)
    }

    fn resolve_object(&self, object: &Object) -> Result<Vec<ObjectWithCoord>> {
        match object {
            Object::Base(descriptor) => Ok(self.resolve_base(object, descriptor)),
            Object::Qualified { obj, loc } => {
                if self.matcher.is_floor(object) {
                    return Err(InterpretError::UnsupportedRelation);
                }

                let references = self.resolve(&loc.ent)?;
                let descriptor = obj.descriptor();
                let related: Vec<ObjectWithCoord> = references
                    .iter()
                    .flat_map(|reference| {
                        self.spatial
                            .match_candidates(loc.rel, descriptor, reference)
                    })
                    .collect();

                tracing::trace!(
                    relation = %loc.rel,
                    references = references.len(),
                    related = related.len(),
                    "Resolved qualified object"
                );
                Ok(related)
            }
        }
    }

    fn resolve_base(&self, object: &Object, descriptor: &Descriptor) -> Vec<ObjectWithCoord> {
        if self.matcher.is_floor(object) {
            return vec![ObjectWithCoord::floor()];
        }

        self.matcher
            .find_matching_ids(descriptor, self.world)
            .into_iter()
            .filter(|id| !self.world.is_held(id))
            .filter_map(|id| {
                let coord = self.matcher.coordinate_of(&id, self.world)?;
                let definition = self.world.objects.get(&id)?;
                Some(ObjectWithCoord::new(id, definition, Some(coord)))
            })
            .collect()
    }
}
