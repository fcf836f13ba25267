use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures around the optional regression-model artifact. Absence and
/// corruption are distinct variants; both recover to the default model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact not found at '{0}'")]
    NotFound(String),

    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Model fit failed: {0}")]
    Fit(String),
}
