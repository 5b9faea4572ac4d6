//! Physical-law predicates for candidate arrangements

pub mod physics;

pub use physics::{physics_for, NoPhysics, PhysicalLaw, StackingRules};
