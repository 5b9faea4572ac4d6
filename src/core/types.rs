//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the synthetic floor object
pub const FLOOR_ID: &str = "floor";

/// Unique identifier for world objects ("a", "b", ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn floor() -> Self {
        Self(FLOOR_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Object shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
    Floor,
    /// Wildcard used by descriptions such as "an object"
    AnyForm,
}

impl Form {
    /// The word used for this form in user input
    pub fn keyword(&self) -> &'static str {
        match self {
            Form::Brick => "brick",
            Form::Plank => "plank",
            Form::Ball => "ball",
            Form::Pyramid => "pyramid",
            Form::Box => "box",
            Form::Table => "table",
            Form::Floor => "floor",
            Form::AnyForm => "anyform",
        }
    }

    /// Whether an object of form `other` satisfies a description of this form
    pub fn admits(&self, other: Form) -> bool {
        *self == Form::AnyForm || *self == other
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Object size. Ordered so that `Small < Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Blue,
    Green,
    Yellow,
    White,
}

/// Spatial relation between two objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Ontop,
    Inside,
    Above,
    Under,
    Beside,
    LeftOf,
    RightOf,
}

impl Relation {
    pub fn name(&self) -> &'static str {
        match self {
            Relation::Ontop => "ontop",
            Relation::Inside => "inside",
            Relation::Above => "above",
            Relation::Under => "under",
            Relation::Beside => "beside",
            Relation::LeftOf => "leftof",
            Relation::RightOf => "rightof",
        }
    }

    /// Relations that place the subject directly on its target
    pub fn is_support(&self) -> bool {
        matches!(self, Relation::Ontop | Relation::Inside)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of an object: `x` is the stack index, `y` the height (0 = on the floor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
