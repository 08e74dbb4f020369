/// Convenience result type used across bedframe.
pub type BedframeResult<T> = Result<T, BedframeError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum BedframeError {
    /// Invalid user-provided or project data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or binarizing frame images.
    #[error("prepare error: {0}")]
    Prepare(String),

    /// Errors while assembling or emitting track records.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BedframeError {
    /// Build a [`BedframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BedframeError::Prepare`] value.
    pub fn prepare(msg: impl Into<String>) -> Self {
        Self::Prepare(msg.into())
    }

    /// Build a [`BedframeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
