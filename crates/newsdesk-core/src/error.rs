use thiserror::Error;

/// Top-level error type for the Newsdesk system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for
/// NewsdeskError` so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NewsdeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote API error: {0}")]
    Api(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for NewsdeskError {
    fn from(err: toml::de::Error) -> Self {
        NewsdeskError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for NewsdeskError {
    fn from(err: toml::ser::Error) -> Self {
        NewsdeskError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for NewsdeskError {
    fn from(err: serde_json::Error) -> Self {
        NewsdeskError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Newsdesk operations.
pub type Result<T> = std::result::Result<T, NewsdeskError>;
