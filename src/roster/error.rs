use crate::form::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid form: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
