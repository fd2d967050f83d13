//! Core logger types and traits

mod adjust;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod options;
pub mod settings;
pub mod sink;
pub mod timestamp;
pub mod value;

pub use config::{FormatKind, LoggerConfig, StaticField};
pub use error::{LoggerError, Result};
pub use level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use options::LogOption;
pub use settings::{Settings, StaticKv, DEFAULT_LEVEL_KEY, DEFAULT_MESSAGE_KEY, DEFAULT_TIME_KEY};
pub use sink::{ExclusiveWriter, LineWriter, SharedWriter};
pub use timestamp::{Clock, FixedClock, SystemClock, TimeFormat};
pub use value::Value;
