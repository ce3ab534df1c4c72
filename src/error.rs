#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Output buffer too small: write at index {index} with capacity {capacity}")]
    BufferTooSmall { index: usize, capacity: usize },

    #[error("Bad input buffer size: read at index {index} past {count} code units")]
    BadBufferSize { index: usize, count: usize },

    #[error("SMC key name must be exactly 4 bytes, got {0}")]
    InvalidKey(usize),

    #[error("Invalid length {0}")]
    InvalidLength(String),

    #[error("Could not locate Apple SMC Protocol, no SMC read possible")]
    ProtocolUnavailable,

    #[error("Could not read SMC key named {key} for length {length}")]
    ReadFailed { key: String, length: u32 },

    #[error("System call error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn usage<S: Into<String>>(msg: S) -> Self {
        Error::Usage(msg.into())
    }

    pub(crate) fn invalid_length<S: Into<String>>(text: S) -> Self {
        Error::InvalidLength(text.into())
    }

    pub(crate) fn read_failed<S: Into<String>>(key: S, length: u32) -> Self {
        Error::ReadFailed { key: key.into(), length }
    }

    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    pub(crate) fn system<S: Into<String>>(msg: S) -> Self {
        Error::System(msg.into())
    }

    /// True for errors caused by how the tool was invoked rather than by the endpoint.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::InvalidKey(_) | Error::InvalidLength(_))
    }
}

/// Result type for smc-reader operations
pub type Result<T> = std::result::Result<T, Error>;
