//! Interpreter configuration
//!
//! Everything here has a working default; a TOML file only needs to name
//! the values it overrides.

use crate::core::error::{InterpretError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which physical-law predicate the interpreter filters targets with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicsMode {
    /// Blocks-world stacking laws (balls, boxes, sizes)
    #[default]
    Standard,
    /// Accept every arrangement
    None,
}

/// Configuration for the interpreter and its front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Word searched for in the input when a description uses the wildcard form
    ///
    /// "put an object on the table" is parsed with form `anyform`, but the
    /// user typed "object", so that is what the disambiguation renderer looks for.
    pub wildcard_placeholder: String,

    /// Text inserted after each qualified noun when rendering competing parses
    ///
    /// With the default, "put the ball in a box on the floor" is shown as
    /// "put the ball that is in a box on the floor" for one of its readings.
    pub disambiguation_marker: String,

    /// Physical-law predicate applied to candidate targets
    pub physics: PhysicsMode,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            wildcard_placeholder: "object".to_string(),
            disambiguation_marker: " that is".to_string(),
            physics: PhysicsMode::Standard,
            log_filter: "shrdlite=info".to_string(),
        }
    }
}

impl InterpreterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: InterpreterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.wildcard_placeholder.trim().is_empty() {
            return Err(InterpretError::InvalidConfig(
                "wildcard_placeholder must not be empty".into(),
            ));
        }

        if self.disambiguation_marker.is_empty() {
            return Err(InterpretError::InvalidConfig(
                "disambiguation_marker must not be empty".into(),
            ));
        }

        Ok(())
    }
}
