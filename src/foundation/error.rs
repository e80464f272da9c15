/// Convenience result type used across realgraph.
pub type GraphResult<T> = Result<T, GraphError>;

/// Top-level error taxonomy used by graph APIs.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    /// Invalid user-provided configuration or sample.
    #[error("validation error: {0}")]
    Validation(String),

    /// A kernel was handed a buffer of a different size than it was built for.
    #[error("dimension mismatch: {0}")]
    Dimension(String),

    /// A scale factor decayed below the configured minimum.
    #[error("numeric decay: {0}")]
    NumericDecay(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GraphError {
    /// Build a [`GraphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GraphError::Dimension`] value.
    pub fn dimension(msg: impl Into<String>) -> Self {
        Self::Dimension(msg.into())
    }

    /// Build a [`GraphError::NumericDecay`] value.
    pub fn numeric_decay(msg: impl Into<String>) -> Self {
        Self::NumericDecay(msg.into())
    }

    /// Build a [`GraphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
