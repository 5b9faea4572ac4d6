//! Interpretation pipeline
//!
//! Parses -> Interpreter -> CommandInterpreter -> EntityResolver -> SpatialMatcher
//! -> PhysicalLawValidator -> GoalBuilder

pub mod command;
pub mod goal;
pub mod orchestrator;
pub mod render;
pub mod resolver;
pub mod spatial;
pub mod validator;

pub use command::CommandInterpreter;
pub use goal::{Conjunction, Goal, GoalBuilder, GoalKind, Literal, Predicate, TargetMap};
pub use orchestrator::{
    Disambiguation, InterpretationResult, Interpreter, Outcome, SelectionPrompt,
};
pub use render::DisambiguationRenderer;
pub use resolver::EntityResolver;
pub use spatial::SpatialMatcher;
pub use validator::PhysicalLawValidator;
