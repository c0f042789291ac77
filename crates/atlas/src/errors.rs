//! Shared error types for the atlas crates.

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre: {0}")]
    ErrorReporter(String),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of the key-value store backing the theme flag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is unavailable")]
    Unavailable,
    #[error("Failed to write key {key}: {reason}")]
    WriteFailed { key: String, reason: String },
}
