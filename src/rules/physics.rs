//! Physical laws of the blocks world
//!
//! A law is asked whether putting `subject` in `relation` to `target` would
//! break physics. Only the support relations (`ontop`, `inside`) can; the
//! others describe positions that any stacking order can reach.

use crate::core::config::PhysicsMode;
use crate::core::types::{Form, Relation, Size};
use crate::world::ObjectWithCoord;

/// Physical-consistency predicate used to filter candidate targets
pub trait PhysicalLaw {
    /// True if `subject` cannot stand in `relation` to `target`
    fn violates(
        &self,
        subject: &ObjectWithCoord,
        target: &ObjectWithCoord,
        relation: Relation,
    ) -> bool;
}

/// The standard stacking rules:
///
/// - Balls must be in boxes or on the floor, and cannot support anything.
/// - Small objects cannot support large objects.
/// - Objects go inside boxes but on top of everything else.
/// - Boxes cannot contain pyramids, planks or boxes of the same size.
/// - Small boxes cannot be supported by small bricks or pyramids.
/// - Large boxes cannot be supported by large pyramids.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackingRules;

impl StackingRules {
    pub fn new() -> Self {
        Self
    }

    fn violates_support(
        subject: &ObjectWithCoord,
        target: &ObjectWithCoord,
        relation: Relation,
    ) -> bool {
        if subject.is_floor() {
            return true;
        }
        if target.is_floor() {
            return relation == Relation::Inside;
        }

        match relation {
            Relation::Inside if target.form != Form::Box => return true,
            Relation::Ontop if target.form == Form::Box => return true,
            _ => {}
        }

        if target.form == Form::Ball {
            return true;
        }
        if subject.form == Form::Ball && target.form != Form::Box {
            return true;
        }
        if let (Some(subject_size), Some(target_size)) = (subject.size, target.size) {
            if target_size < subject_size {
                return true;
            }
        }

        if target.form == Form::Box
            && matches!(subject.form, Form::Pyramid | Form::Plank | Form::Box)
            && subject.size == target.size
        {
            return true;
        }

        if subject.form == Form::Box {
            let small_box_on_small_point = subject.size == Some(Size::Small)
                && target.size == Some(Size::Small)
                && matches!(target.form, Form::Brick | Form::Pyramid);
            let large_box_on_large_pyramid = subject.size == Some(Size::Large)
                && target.size == Some(Size::Large)
                && target.form == Form::Pyramid;
            if small_box_on_small_point || large_box_on_large_pyramid {
                return true;
            }
        }

        false
    }
}

impl PhysicalLaw for StackingRules {
    fn violates(
        &self,
        subject: &ObjectWithCoord,
        target: &ObjectWithCoord,
        relation: Relation,
    ) -> bool {
        relation.is_support() && Self::violates_support(subject, target, relation)
    }
}

/// Accepts every arrangement
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPhysics;

impl PhysicalLaw for NoPhysics {
    fn violates(&self, _: &ObjectWithCoord, _: &ObjectWithCoord, _: Relation) -> bool {
        false
    }
}

/// The physical law selected by `mode`
pub fn physics_for(mode: PhysicsMode) -> Box<dyn PhysicalLaw> {
    match mode {
        PhysicsMode::Standard => Box::new(StackingRules),
        PhysicsMode::None => Box::new(NoPhysics),
    }
}
