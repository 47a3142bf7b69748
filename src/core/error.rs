use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("not enough input values: need at least {needed}, got {got}")]
    InsufficientInput { needed: usize, got: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
