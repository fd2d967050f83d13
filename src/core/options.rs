//! Construction-time options
//!
//! Options are applied in the order given. A later option replaces the effect
//! of an earlier one for the same setting, except static key/value pairs,
//! which accumulate.

use super::error::{LoggerError, Result};
use super::settings::{Settings, StaticKv};
use super::sink::{self, ExclusiveWriter, LineWriter, SharedWriter, Sink, WriteGuard};
use super::timestamp::{Clock, TimeFormat};
use super::value::Value;
use std::collections::HashSet;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// One named configuration change
pub enum LogOption {
    EnableDebug(bool),
    EnableTrace(bool),
    DisableMutex(bool),
    TimeFormat(TimeFormat),
    EnableLocalTime(bool),
    StaticKv(StaticKv),
    MessageKey(String),
    TimeKey(String),
    LevelKey(String),
    Writer(Box<dyn LineWriter>),
    DisableTime(bool),
    DisableLevel(bool),
    Clock(Arc<dyn Clock>),
}

impl fmt::Debug for LogOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogOption::EnableDebug(on) => f.debug_tuple("EnableDebug").field(on).finish(),
            LogOption::EnableTrace(on) => f.debug_tuple("EnableTrace").field(on).finish(),
            LogOption::DisableMutex(off) => f.debug_tuple("DisableMutex").field(off).finish(),
            LogOption::TimeFormat(format) => f.debug_tuple("TimeFormat").field(format).finish(),
            LogOption::EnableLocalTime(on) => f.debug_tuple("EnableLocalTime").field(on).finish(),
            LogOption::StaticKv(kv) => f.debug_tuple("StaticKv").field(kv).finish(),
            LogOption::MessageKey(key) => f.debug_tuple("MessageKey").field(key).finish(),
            LogOption::TimeKey(key) => f.debug_tuple("TimeKey").field(key).finish(),
            LogOption::LevelKey(key) => f.debug_tuple("LevelKey").field(key).finish(),
            LogOption::Writer(_) => f.write_str("Writer(..)"),
            LogOption::DisableTime(off) => f.debug_tuple("DisableTime").field(off).finish(),
            LogOption::DisableLevel(off) => f.debug_tuple("DisableLevel").field(off).finish(),
            LogOption::Clock(_) => f.write_str("Clock(..)"),
        }
    }
}

impl LogOption {
    /// Append to (or create) the file at `path` and log into it
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(with_shared_writer(file))
    }

    fn apply(self, draft: &mut Draft) -> Result<()> {
        let settings = &mut draft.settings;
        match self {
            LogOption::EnableDebug(on) => settings.debug = on,
            LogOption::EnableTrace(on) => settings.trace = on,
            LogOption::DisableMutex(off) => {
                if off {
                    draft.mutex = false;
                }
            }
            LogOption::TimeFormat(format) => settings.time_format = format,
            LogOption::EnableLocalTime(on) => settings.local_time = on,
            LogOption::StaticKv(kv) => settings.static_kvs.push(kv),
            LogOption::MessageKey(key) => settings.message_key = non_empty(key, "message")?,
            LogOption::TimeKey(key) => settings.time_key = non_empty(key, "time")?,
            LogOption::LevelKey(key) => settings.level_key = non_empty(key, "level")?,
            LogOption::Writer(writer) => draft.writer = writer,
            LogOption::DisableTime(off) => settings.disable_time = off,
            LogOption::DisableLevel(off) => settings.disable_level = off,
            LogOption::Clock(clock) => settings.clock = clock,
        }
        Ok(())
    }
}

fn non_empty(key: String, field: &'static str) -> Result<String> {
    if key.is_empty() {
        Err(LoggerError::empty_key(field))
    } else {
        Ok(key)
    }
}

/// Enable or disable `Debug` lines
pub fn enable_debug(on: bool) -> LogOption {
    LogOption::EnableDebug(on)
}

/// Enable or disable `Trace` lines
pub fn enable_trace(on: bool) -> LogOption {
    LogOption::EnableTrace(on)
}

/// Drop the lock the logger takes around each write.
///
/// Only writers usable through a shared reference run unlocked; writers
/// added with [`with_writer`] keep their own lock.
pub fn disable_mutex(off: bool) -> LogOption {
    LogOption::DisableMutex(off)
}

pub fn with_time_format(format: impl Into<TimeFormat>) -> LogOption {
    LogOption::TimeFormat(format.into())
}

/// Render times in the local zone instead of UTC
pub fn enable_local_time(on: bool) -> LogOption {
    LogOption::EnableLocalTime(on)
}

/// Add a pair emitted on every line, before the call's own pairs. Repeatable.
pub fn with_static_kv(key: impl Into<String>, value: impl Into<Value>) -> LogOption {
    LogOption::StaticKv(StaticKv {
        key: key.into(),
        value: value.into(),
    })
}

pub fn with_message_key(key: impl Into<String>) -> LogOption {
    LogOption::MessageKey(key.into())
}

pub fn with_time_key(key: impl Into<String>) -> LogOption {
    LogOption::TimeKey(key.into())
}

pub fn with_level_key(key: impl Into<String>) -> LogOption {
    LogOption::LevelKey(key.into())
}

/// Log into any `io::Write`
pub fn with_writer<W: Write + Send + 'static>(writer: W) -> LogOption {
    LogOption::Writer(Box::new(ExclusiveWriter::new(writer)))
}

/// Log into a writer that can be written through `&W`, such as `Stdout` or `File`
pub fn with_shared_writer<W>(writer: W) -> LogOption
where
    W: Send + Sync + 'static,
    for<'a> &'a W: Write,
{
    LogOption::Writer(Box::new(SharedWriter::new(writer)))
}

pub fn with_line_writer(writer: impl LineWriter + 'static) -> LogOption {
    LogOption::Writer(Box::new(writer))
}

/// Leave the time field out of every line
pub fn disable_time(off: bool) -> LogOption {
    LogOption::DisableTime(off)
}

/// Leave the level field out of every line
pub fn disable_level(off: bool) -> LogOption {
    LogOption::DisableLevel(off)
}

/// Take "now" from `clock` instead of the system clock
pub fn with_clock(clock: impl Clock + 'static) -> LogOption {
    LogOption::Clock(Arc::new(clock))
}

/// Configuration being assembled from options
pub(crate) struct Draft {
    settings: Settings,
    writer: Box<dyn LineWriter>,
    mutex: bool,
}

impl Draft {
    pub(crate) fn new() -> Self {
        Self {
            settings: Settings::default(),
            writer: sink::stdout(),
            mutex: true,
        }
    }

    pub(crate) fn apply_all(&mut self, options: impl IntoIterator<Item = LogOption>) -> Result<()> {
        for option in options {
            option.apply(self)?;
        }
        Ok(())
    }

    /// Check cross-option invariants and split into settings and sink
    pub(crate) fn finish(self) -> Result<(Settings, Sink)> {
        let settings = self.settings;

        let keys: HashSet<&str> = [
            settings.message_key.as_str(),
            settings.level_key.as_str(),
            settings.time_key.as_str(),
        ]
        .into_iter()
        .collect();
        if keys.len() != 3 {
            return Err(LoggerError::duplicate_keys(
                &settings.message_key,
                &settings.level_key,
                &settings.time_key,
            ));
        }

        settings
            .time_format
            .validate()
            .map_err(LoggerError::time_format)?;

        let sink = Sink::new(self.writer, WriteGuard::new(self.mutex));
        Ok((settings, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(options: Vec<LogOption>) -> Result<(Settings, Sink)> {
        let mut draft = Draft::new();
        draft.apply_all(options)?;
        draft.finish()
    }

    #[test]
    fn test_later_options_win() {
        let (settings, _) = build(vec![
            enable_debug(true),
            with_message_key("msg"),
            enable_debug(false),
            with_message_key("message"),
        ])
        .unwrap();

        assert!(!settings.debug_enabled());
        assert_eq!(settings.message_key(), "message");
    }

    #[test]
    fn test_static_kvs_accumulate_in_order() {
        let (settings, _) = build(vec![
            with_static_kv("hostname", "localhost"),
            with_static_kv("ip", "127.0.0.1"),
            with_static_kv("hostname", "again"),
        ])
        .unwrap();

        let keys: Vec<&str> = settings.static_kvs().iter().map(|kv| kv.key.as_str()).collect();
        assert_eq!(keys, vec!["hostname", "ip", "hostname"]);
    }

    #[test]
    fn test_empty_keys_are_rejected() {
        let err = build(vec![with_message_key("")]).unwrap_err();
        assert!(matches!(err, LoggerError::EmptyFieldKey { field: "message" }));

        let err = build(vec![with_time_key("")]).unwrap_err();
        assert!(matches!(err, LoggerError::EmptyFieldKey { field: "time" }));

        let err = build(vec![with_level_key("")]).unwrap_err();
        assert!(matches!(err, LoggerError::EmptyFieldKey { field: "level" }));
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let err = build(vec![with_level_key("TIME")]).unwrap_err();
        assert!(matches!(err, LoggerError::DuplicateFieldKeys { .. }));

        let err = build(vec![with_message_key("x"), with_time_key("x")]).unwrap_err();
        assert!(matches!(err, LoggerError::DuplicateFieldKeys { .. }));
    }

    #[test]
    fn test_duplicates_resolved_by_later_option() {
        let result = build(vec![with_level_key("TIME"), with_time_key("ts")]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_time_format() {
        let err = build(vec![with_time_format("%Q")]).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_disable_mutex() {
        let (_, sink) = build(vec![]).unwrap();
        assert!(sink.is_guarded());

        let (_, sink) = build(vec![disable_mutex(true)]).unwrap();
        assert!(!sink.is_guarded());

        let (_, sink) = build(vec![disable_mutex(false)]).unwrap();
        assert!(sink.is_guarded());
    }

    #[test]
    fn test_file_option() {
        let dir = tempfile::tempdir().unwrap();
        let option = LogOption::file(dir.path().join("app.log")).unwrap();
        assert!(matches!(option, LogOption::Writer(_)));

        let err = LogOption::file(dir.path().join("missing").join("app.log")).unwrap_err();
        assert!(matches!(err, LoggerError::IoError(_)));
    }

    #[test]
    fn test_option_debug() {
        assert_eq!(format!("{:?}", enable_trace(true)), "EnableTrace(true)");
        assert_eq!(format!("{:?}", with_writer(Vec::new())), "Writer(..)");
    }
}
