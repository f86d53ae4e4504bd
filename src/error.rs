use thiserror::Error;

/// Errors raised by the document model, the codecs and the file layer.
///
/// Every error is local to the operation that produced it. Nothing here is
/// transient, so callers never retry.
#[derive(Debug, Error)]
pub enum DesignError {
    /// A bound was requested from an empty sequence of points or bounds
    #[error("cannot compute a bound from empty input")]
    EmptyInput,

    /// Geometry that cannot form an entity (e.g. a pline without points)
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// The document stream is truncated or carries data we do not understand
    #[error("corrupt document: {0}")]
    CorruptDocument(String),

    /// The document has more entities or points than the file format can count
    #[error("document too large to encode: {0}")]
    TooLarge(String),

    /// File-system failure while saving or loading
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DesignError {
    fn from(error: serde_json::Error) -> Self {
        DesignError::Config(error.to_string())
    }
}

/// Result type used across the crate
pub type DesignResult<T> = Result<T, DesignError>;
