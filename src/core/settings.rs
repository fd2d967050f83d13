//! Immutable configuration shared with formatters

use super::timestamp::{system_clock, Clock, TimeFormat};
use super::value::Value;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_MESSAGE_KEY: &str = "MESSAGE";
pub const DEFAULT_LEVEL_KEY: &str = "LEVEL";
pub const DEFAULT_TIME_KEY: &str = "TIME";

/// A key/value pair attached to every line a logger writes
#[derive(Debug, Clone, PartialEq)]
pub struct StaticKv {
    pub key: String,
    pub value: Value,
}

/// Everything a [`Formatter`](crate::Formatter) may read about its logger.
///
/// Settings are fixed once the logger is built, so formatters running on
/// several threads at once only ever see shared, read-only state.
#[derive(Clone)]
pub struct Settings {
    pub(crate) debug: bool,
    pub(crate) trace: bool,
    pub(crate) time_format: TimeFormat,
    pub(crate) local_time: bool,
    pub(crate) static_kvs: Vec<StaticKv>,
    pub(crate) message_key: String,
    pub(crate) level_key: String,
    pub(crate) time_key: String,
    pub(crate) disable_time: bool,
    pub(crate) disable_level: bool,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            trace: false,
            time_format: TimeFormat::default(),
            local_time: false,
            static_kvs: Vec::new(),
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            level_key: DEFAULT_LEVEL_KEY.to_string(),
            time_key: DEFAULT_TIME_KEY.to_string(),
            disable_time: false,
            disable_level: false,
            clock: system_clock(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("debug", &self.debug)
            .field("trace", &self.trace)
            .field("time_format", &self.time_format)
            .field("local_time", &self.local_time)
            .field("static_kvs", &self.static_kvs)
            .field("message_key", &self.message_key)
            .field("level_key", &self.level_key)
            .field("time_key", &self.time_key)
            .field("disable_time", &self.disable_time)
            .field("disable_level", &self.disable_level)
            .finish_non_exhaustive()
    }
}

impl Settings {
    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace
    }

    pub fn time_format(&self) -> &TimeFormat {
        &self.time_format
    }

    pub fn local_time(&self) -> bool {
        self.local_time
    }

    pub fn static_kvs(&self) -> &[StaticKv] {
        &self.static_kvs
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn level_key(&self) -> &str {
        &self.level_key
    }

    pub fn time_key(&self) -> &str {
        &self.time_key
    }

    /// Whether lines carry a timestamp field
    pub fn time_enabled(&self) -> bool {
        !self.disable_time
    }

    /// Whether lines carry a level field
    pub fn level_enabled(&self) -> bool {
        !self.disable_level
    }

    /// The current instant, rendered in the configured zone and format
    pub fn timestamp(&self) -> String {
        self.time_format
            .format_in_zone(&self.clock.now(), self.local_time)
    }
}
