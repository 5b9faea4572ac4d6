//! Physical plausibility filter for candidate targets

use crate::core::types::{ObjectId, Relation};
use crate::rules::PhysicalLaw;
use crate::world::ObjectWithCoord;

pub struct PhysicalLawValidator<'a> {
    physics: &'a dyn PhysicalLaw,
}

impl<'a> PhysicalLawValidator<'a> {
    pub fn new(physics: &'a dyn PhysicalLaw) -> Self {
        Self { physics }
    }

    /// Ids of the candidates `subject` may legally be put `relation` to,
    /// in candidate order. The subject itself is never a valid target.
    pub fn filter_valid(
        &self,
        subject: &ObjectWithCoord,
        candidates: &[ObjectWithCoord],
        relation: Relation,
    ) -> Vec<ObjectId> {
        candidates
            .iter()
            .filter(|candidate| candidate.id != subject.id)
            .filter(|candidate| !self.physics.violates(subject, candidate, relation))
            .map(|candidate| candidate.id.clone())
            .collect()
    }
}
