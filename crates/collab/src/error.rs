//! Error types for the collab boundary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollabError {
    #[error(transparent)]
    Store(#[from] deck_store::StoreError),

    #[error("malformed wire message: {0}")]
    Wire(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CollabError>;
