//! Error types for store operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("slide index {index} out of range (deck has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;
