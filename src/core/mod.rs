pub mod config;
pub mod error;
pub mod types;

pub use config::{InterpreterConfig, PhysicsMode};
pub use error::{InterpretError, Result};
pub use types::{Color, Coordinate, Form, ObjectId, Relation, Size};
