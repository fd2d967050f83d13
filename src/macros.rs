//! Macros for building key/value lists and logging with them.
//!
//! # Examples
//!
//! ```
//! use kv_logging::{info, kv, Logger, SimpleFormatter};
//!
//! let logger = Logger::builder(SimpleFormatter)
//!     .writer(std::io::sink())
//!     .build()
//!     .unwrap();
//!
//! // Plain message
//! info!(logger, "Server started");
//!
//! // With pairs
//! let port = 8080;
//! info!(logger, "listening", "port", port, "tls", false);
//!
//! // Lists can also be built separately
//! let fields = kv!["user", "alice", "attempt", 3];
//! logger.warning("login failed", &fields).unwrap();
//! ```

/// Build a `Vec<Value>` from alternating keys and values.
///
/// ```
/// use kv_logging::{kv, Value};
///
/// let fields = kv!["a", 1, "b", true];
/// assert_eq!(fields[1], Value::Int(1));
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($item)),+]
    };
}

/// Log at a given level with optional key/value entries.
///
/// Evaluates to the `io::Result<usize>` of the write.
///
/// ```
/// # use kv_logging::{Logger, SimpleFormatter};
/// # let logger = Logger::builder(SimpleFormatter).writer(std::io::sink()).build().unwrap();
/// use kv_logging::{log, LogLevel};
/// log!(logger, LogLevel::Notice, "sum of a and b", "a", 2, "b", 3).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $logger.log($level, $message, &[$($crate::Value::from($item)),*])
    };
}

/// Log an info-level line.
#[macro_export]
macro_rules! info {
    ($logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $logger.info($message, &[$($crate::Value::from($item)),*])
    };
}

/// Log a notice-level line.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $logger.notice($message, &[$($crate::Value::from($item)),*])
    };
}

/// Log a warning-level line.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $logger.warning($message, &[$($crate::Value::from($item)),*])
    };
}

/// Log an error-level line.
///
/// ```
/// # use kv_logging::{Logger, SimpleFormatter};
/// # let logger = Logger::builder(SimpleFormatter).writer(std::io::sink()).build().unwrap();
/// use kv_logging::error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory");
/// error!(logger, "could not do something with error", "error", err).unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $logger.error($message, &[$($crate::Value::from($item)),*])
    };
}

/// Log a fatal-level line. Does not exit the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $logger.fatal($message, &[$($crate::Value::from($item)),*])
    };
}

/// Log a debug-level line (no-op unless debug is enabled).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $logger.debug($message, &[$($crate::Value::from($item)),*])
    };
}

/// Log a trace-level line (no-op unless trace is enabled).
#[macro_export]
macro_rules! trace {
    ($logger:expr, $message:expr $(, $item:expr)* $(,)?) => {
        $logger.trace($message, &[$($crate::Value::from($item)),*])
    };
}
