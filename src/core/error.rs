//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors raised while configuring a [`Logger`](crate::Logger).
///
/// Writing a line never produces a `LoggerError`; the sink's `io::Error` is
/// handed back to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// One of the message/level/time field names was set to an empty string
    #[error("missing key for {field}")]
    EmptyFieldKey { field: &'static str },

    /// Message, level and time field names are not pairwise distinct
    #[error("key names have to be unique (message: '{message}', level: '{level}', time: '{time}')")]
    DuplicateFieldKeys {
        message: String,
        level: String,
        time: String,
    },

    /// A custom strftime pattern could not be parsed
    #[error("invalid time format '{pattern}'")]
    InvalidTimeFormat { pattern: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an empty field key error
    pub fn empty_key(field: &'static str) -> Self {
        LoggerError::EmptyFieldKey { field }
    }

    /// Create a duplicate field keys error
    pub fn duplicate_keys(
        message: impl Into<String>,
        level: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        LoggerError::DuplicateFieldKeys {
            message: message.into(),
            level: level.into(),
            time: time.into(),
        }
    }

    /// Create an invalid time format error
    pub fn time_format(pattern: impl Into<String>) -> Self {
        LoggerError::InvalidTimeFormat {
            pattern: pattern.into(),
        }
    }
}
