use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpVersionError {
    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Unknown version upgrade level: {0}. Available are: major, minor, patch")]
    UnknownLevel(String),

    #[error("Version marker not found: {0}")]
    VersionNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpVersionError>;

impl BumpVersionError {
    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BumpVersionError::Parse(msg.into())
    }

    /// Create an unknown-level error naming the offending value
    pub fn unknown_level(level: impl Into<String>) -> Self {
        BumpVersionError::UnknownLevel(level.into())
    }

    /// Create a missing-version-marker error with context
    pub fn version_not_found(msg: impl Into<String>) -> Self {
        BumpVersionError::VersionNotFound(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpVersionError::Config(msg.into())
    }
}
