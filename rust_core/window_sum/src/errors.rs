use thiserror::Error;

/// Window size incompatible with the sequence being scanned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidWindowError {
    #[error("window size must be at least 1, got {0}")]
    NonPositive(i64),

    #[error("window size {window_size} exceeds sequence length {len}")]
    ExceedsLength { window_size: usize, len: usize },
}

/// Failures while loading or running a [`crate::ScanRequest`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Window(#[from] InvalidWindowError),
}
