use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpretError {
    #[error("Found no interpretation")]
    NoInterpretation,

    #[error("No object is being held at the moment")]
    NothingHeld,

    #[error("Can't move the floor")]
    CannotMoveFloor,

    #[error("Floor can't be related this way")]
    UnsupportedRelation,

    #[error("Selection {selection} is out of range (expected 0..{choices})")]
    InvalidSelection { selection: usize, choices: usize },

    #[error("Unknown object: {0}")]
    UnknownObject(crate::core::types::ObjectId),

    #[error("Invalid world: {0}")]
    InvalidWorld(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl InterpretError {
    /// True for failures caused by what the user said, as opposed to bad input files
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            InterpretError::NoInterpretation
                | InterpretError::NothingHeld
                | InterpretError::CannotMoveFloor
                | InterpretError::UnsupportedRelation
        )
    }
}

pub type Result<T> = std::result::Result<T, InterpretError>;
