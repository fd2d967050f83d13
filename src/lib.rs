//! # kv_logging
//!
//! Leveled, structured logging where each call carries a message plus an
//! optional list of alternating keys and values, rendered as one line.
//!
//! ## Features
//!
//! - **Three formats**: human-readable simple lines, quoted key/value lines
//!   and JSON objects with sorted keys; custom formatters are plain closures
//! - **Static pairs**: fields attached to every line of a logger
//! - **Configurable keys and time**: rename the message/level/time fields,
//!   pick a time format, UTC or local zone
//! - **Thread safe**: one write per line, serialized unless disabled
//!
//! ## Example
//!
//! ```
//! use kv_logging::{kv, JsonFormatter, Logger, TimeFormat};
//!
//! let logger = Logger::builder(JsonFormatter)
//!     .time_format(TimeFormat::Stamp)
//!     .static_kv("_HOSTNAME", "my-hostname")
//!     .writer(std::io::sink())
//!     .build()
//!     .expect("valid configuration");
//!
//! logger.info("request served", &kv!["status", 200, "path", "/"]).unwrap();
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;

pub use crate::core::options;

pub mod prelude {
    pub use crate::core::{
        Clock, LogLevel, LogOption, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result,
        TimeFormat, Value,
    };
    pub use crate::formatters::{Formatter, JsonFormatter, KvFormatter, SimpleFormatter};
    pub use crate::global::{set_logger, logger};
}

pub use crate::core::{
    Clock, ExclusiveWriter, FixedClock, FormatKind, LineWriter, LogLevel, LogOption, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, Result, Settings, SharedWriter, StaticField,
    StaticKv, SystemClock, TimeFormat, Value,
};
pub use crate::formatters::{Formatter, JsonFormatter, KvFormatter, SimpleFormatter};
pub use crate::global::{debug, error, fatal, info, logger, notice, set_logger, trace, warning};
