//! Shrdlite - blocks-world goal interpreter for natural language commands

pub mod core;
pub mod interpreter;
pub mod parse;
pub mod rules;
pub mod world;
