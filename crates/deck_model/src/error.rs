//! Error types for the deck model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
