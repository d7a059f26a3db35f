//! Error types for factory and template operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("failed to read image file: {0}")]
    ImageRead(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] deck_store::StoreError),
}

pub type Result<T> = std::result::Result<T, FactoryError>;
