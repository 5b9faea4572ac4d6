//! Parse trees produced by the natural-language parser
//!
//! The grammar itself lives outside this crate. A parse arrives as JSON in
//! the shape the parser emits:
//!
//! ```json
//! {"input": "take the white ball",
//!  "prs": {"cmd": "take",
//!          "ent": {"quant": "the", "obj": {"form": "ball", "color": "white"}},
//!          "loc": null}}
//! ```
//!
//! Qualified objects nest an inner object and a location:
//! `{"obj": {"form": "ball"}, "loc": {"rel": "inside", "ent": {...}}}`.

use crate::core::error::Result;
use crate::core::types::{Color, Form, Relation, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One candidate reading of the user's sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// The sentence as typed
    pub input: String,
    /// The command tree for this reading
    #[serde(rename = "prs")]
    pub command: Command,
}

/// Verb of the command. Only used for display; the goal depends on `ent`/`loc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Take,
    Put,
    Move,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub cmd: Verb,
    /// `None` means "it", the object currently held
    #[serde(default)]
    pub ent: Option<Entity>,
    /// `None` means a take command
    #[serde(default)]
    pub loc: Option<Location>,
}

/// Quantifiers are all read as "any one valid candidate"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    The,
    Any,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub quant: Quantifier,
    pub obj: Object,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub rel: Relation,
    pub ent: Entity,
}

/// An object description, optionally qualified by where it is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Object {
    /// "the ball that is inside a box"
    Qualified {
        obj: Box<Object>,
        loc: Box<Location>,
    },
    /// "the white ball"
    Base(Descriptor),
}

/// Form, size and colour of a described object. Missing size or colour matches any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub form: Form,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Descriptor {
    pub fn new(form: Form, size: Option<Size>, color: Option<Color>) -> Self {
        Self { form, size, color }
    }

    pub fn form(form: Form) -> Self {
        Self::new(form, None, None)
    }

    pub fn floor() -> Self {
        Self::form(Form::Floor)
    }

    pub fn is_floor(&self) -> bool {
        self.form == Form::Floor
    }
}

impl Object {
    pub fn base(descriptor: Descriptor) -> Self {
        Object::Base(descriptor)
    }

    pub fn qualified(inner: Object, rel: Relation, ent: Entity) -> Self {
        Object::Qualified {
            obj: Box::new(inner),
            loc: Box::new(Location { rel, ent }),
        }
    }

    /// Attributes of the described object itself, ignoring any qualifier
    pub fn descriptor(&self) -> &Descriptor {
        match self {
            Object::Base(descriptor) => descriptor,
            Object::Qualified { obj, .. } => obj.descriptor(),
        }
    }

    /// The qualifying location, if any
    pub fn location(&self) -> Option<&Location> {
        match self {
            Object::Base(_) => None,
            Object::Qualified { loc, .. } => Some(loc),
        }
    }

    pub fn is_qualified(&self) -> bool {
        matches!(self, Object::Qualified { .. })
    }
}

impl Entity {
    pub fn new(quant: Quantifier, obj: Object) -> Self {
        Self { quant, obj }
    }

    /// "the <obj>"
    pub fn the(obj: Object) -> Self {
        Self::new(Quantifier::The, obj)
    }
}

impl Location {
    pub fn new(rel: Relation, ent: Entity) -> Self {
        Self { rel, ent }
    }
}

impl Command {
    pub fn take(ent: Entity) -> Self {
        Self {
            cmd: Verb::Take,
            ent: Some(ent),
            loc: None,
        }
    }

    pub fn put(ent: Option<Entity>, loc: Location) -> Self {
        Self {
            cmd: Verb::Put,
            ent,
            loc: Some(loc),
        }
    }

    pub fn is_take(&self) -> bool {
        self.loc.is_none()
    }
}

/// Parse a JSON list of parse results
pub fn parses_from_json(json: &str) -> Result<Vec<ParseResult>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON list of parse results from disk
pub fn load_parses(path: &Path) -> Result<Vec<ParseResult>> {
    let content = std::fs::read_to_string(path)?;
    parses_from_json(&content)
}
