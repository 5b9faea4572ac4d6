//! Disambiguated renderings of competing parses
//!
//! "put the white ball in a box on the floor" has two readings. They are
//! shown to the user with the attachment spelled out:
//!
//! - "put the white ball in a box that is on the floor"
//! - "put the white ball that is in a box on the floor"

use crate::core::config::InterpreterConfig;
use crate::core::types::Form;
use crate::parse::{Entity, Object, ParseResult};

#[derive(Debug, Clone)]
pub struct DisambiguationRenderer {
    placeholder: String,
    marker: String,
}

impl Default for DisambiguationRenderer {
    fn default() -> Self {
        Self::from_config(&InterpreterConfig::default())
    }
}

impl DisambiguationRenderer {
    pub fn new(placeholder: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            marker: marker.into(),
        }
    }

    pub fn from_config(config: &InterpreterConfig) -> Self {
        Self::new(&config.wildcard_placeholder, &config.disambiguation_marker)
    }

    /// The parse's input with the marker inserted after every qualified noun,
    /// subject chain first, then destination chain
    pub fn render(&self, parse: &ParseResult) -> String {
        let mut text = parse.input.clone();
        let mut cursor = 0;

        let chains = [
            parse.command.ent.as_ref(),
            parse.command.loc.as_ref().map(|loc| &loc.ent),
        ];
        for entity in chains.into_iter().flatten() {
            cursor = self.mark_chain(&mut text, cursor, entity);
        }

        text
    }

    /// Walk one qualifier chain outermost first; returns the new cursor
    fn mark_chain(&self, text: &mut String, mut cursor: usize, entity: &Entity) -> usize {
        if let Object::Base(descriptor) = &entity.obj {
            return self
                .find_keyword(text, cursor, descriptor.form)
                .unwrap_or(cursor);
        }

        let mut current = entity;
        while let Object::Qualified { obj, loc } = &current.obj {
            let Some(end) = self.find_keyword(text, cursor, obj.descriptor().form) else {
                break;
            };
            text.insert_str(end, &self.marker);
            cursor = end + self.marker.len();
            current = &loc.ent;
        }
        cursor
    }

    /// Byte offset just past the next occurrence of the word for `form`
    fn find_keyword(&self, text: &str, cursor: usize, form: Form) -> Option<usize> {
        let keyword = match form {
            Form::AnyForm => self.placeholder.as_str(),
            other => other.keyword(),
        };
        text.get(cursor..)?
            .find(keyword)
            .map(|offset| cursor + offset + keyword.len())
    }
}
