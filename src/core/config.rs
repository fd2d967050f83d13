//! Declarative logger configuration
//!
//! `LoggerConfig` mirrors the construction options so a logger can be
//! described in a configuration file and deserialized with serde.

use super::error::Result;
use super::logger::{Logger, LoggerBuilder};
use super::options::{self, LogOption};
use super::timestamp::TimeFormat;
use crate::formatters::{Formatter, JsonFormatter, KvFormatter, SimpleFormatter};
use serde::{Deserialize, Serialize};

/// Which built-in formatter to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    Simple,
    Kv,
    Json,
}

impl FormatKind {
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            FormatKind::Simple => Box::new(SimpleFormatter),
            FormatKind::Kv => Box::new(KvFormatter),
            FormatKind::Json => Box::new(JsonFormatter),
        }
    }
}

/// A static pair as written in a configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticField {
    pub key: String,
    pub value: serde_json::Value,
}

/// Serializable description of a logger
///
/// # Example
///
/// ```
/// use kv_logging::LoggerConfig;
///
/// let config = LoggerConfig::from_json_str(r#"{
///     "format": "json",
///     "debug": true,
///     "level_key": "_LVL",
///     "static_fields": [{"key": "_HOSTNAME", "value": "my-hostname"}]
/// }"#).unwrap();
///
/// let logger = config.builder().writer(std::io::sink()).build().unwrap();
/// assert!(logger.settings().debug_enabled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: FormatKind,
    pub debug: bool,
    pub trace: bool,
    pub disable_mutex: bool,
    pub time_format: TimeFormat,
    pub local_time: bool,
    pub static_fields: Vec<StaticField>,
    pub message_key: Option<String>,
    pub time_key: Option<String>,
    pub level_key: Option<String>,
    pub disable_time: bool,
    pub disable_level: bool,
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The equivalent option list, in application order
    pub fn options(&self) -> Vec<LogOption> {
        let mut opts = vec![
            options::enable_debug(self.debug),
            options::enable_trace(self.trace),
            options::disable_mutex(self.disable_mutex),
            options::with_time_format(self.time_format.clone()),
            options::enable_local_time(self.local_time),
            options::disable_time(self.disable_time),
            options::disable_level(self.disable_level),
        ];
        opts.extend(
            self.static_fields
                .iter()
                .map(|field| options::with_static_kv(field.key.clone(), field.value.clone())),
        );
        if let Some(key) = &self.message_key {
            opts.push(options::with_message_key(key.clone()));
        }
        if let Some(key) = &self.time_key {
            opts.push(options::with_time_key(key.clone()));
        }
        if let Some(key) = &self.level_key {
            opts.push(options::with_level_key(key.clone()));
        }
        opts
    }

    /// A builder preloaded with this configuration; further options may be added
    pub fn builder(&self) -> LoggerBuilder {
        LoggerBuilder::from_boxed(self.format.formatter()).options(self.options())
    }

    /// Build a logger writing to standard output
    pub fn build(&self) -> Result<Logger> {
        self.builder().build()
    }
}
