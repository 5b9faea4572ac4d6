//! World snapshot, object lookups and loading

pub mod loader;
pub mod matcher;
pub mod objects;
pub mod state;

pub use loader::WorldLoader;
pub use matcher::{AttributeMatcher, DescriptorMatcher};
pub use objects::{dedup_by_id, ObjectWithCoord};
pub use state::{ObjectDefinition, WorldState};
