//! Parse tree model for commands coming out of the natural-language parser

pub mod tree;

pub use tree::{
    load_parses, parses_from_json, Command, Descriptor, Entity, Location, Object, ParseResult,
    Quantifier, Verb,
};
