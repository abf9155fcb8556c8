/// Result alias that carries the custom [`TurntableError`] type.
pub type Result<T> = std::result::Result<T, TurntableError>;

/// Common error type for the core crate.
///
/// The coordinator itself has no recoverable error states; this type exists
/// for the surrounding plumbing (library parsing, file access in the app).
#[derive(Debug, thiserror::Error)]
pub enum TurntableError {
    /// Free-form error carrying a readable message.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Album library metadata that failed to parse.
    #[error("invalid library metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl TurntableError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for TurntableError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for TurntableError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
