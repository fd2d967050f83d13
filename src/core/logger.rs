//! Main logger implementation

use super::{
    error::Result,
    level::LogLevel,
    options::{self, Draft, LogOption},
    settings::Settings,
    sink::{self, Sink, WriteGuard},
    timestamp::{Clock, TimeFormat},
    value::Value,
};
use crate::formatters::{Formatter, SimpleFormatter};
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// A configured logger.
///
/// Everything except the sink is read-only after construction. Formatting
/// happens on the calling thread outside any lock; only the single write of
/// the finished line is serialized.
///
/// # Example
///
/// ```
/// use kv_logging::options::*;
/// use kv_logging::{kv, KvFormatter, Logger};
///
/// let logger = Logger::new(
///     KvFormatter,
///     vec![with_static_kv("service", "billing"), disable_time(true)],
/// )
/// .expect("valid configuration");
///
/// logger.info("charged card", &kv!["amount", 42]).unwrap();
/// // LEVEL: "Info" MESSAGE: "charged card" service: "billing" amount: "42"
/// ```
pub struct Logger {
    settings: Settings,
    formatter: Box<dyn Formatter>,
    sink: Sink,
}

impl Logger {
    /// Build a logger from a formatter and options applied in order
    pub fn new<F, I>(formatter: F, options: I) -> Result<Self>
    where
        F: Formatter + 'static,
        I: IntoIterator<Item = LogOption>,
    {
        Self::builder(formatter).options(options).build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder<F: Formatter + 'static>(formatter: F) -> LoggerBuilder {
        LoggerBuilder::new(formatter)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Format and write one line, returning the number of bytes written.
    ///
    /// Static pairs come first, in the order they were configured.
    pub fn log(&self, level: LogLevel, message: &str, kv: &[Value]) -> io::Result<usize> {
        let kv: Cow<'_, [Value]> = if self.settings.static_kvs.is_empty() {
            Cow::Borrowed(kv)
        } else {
            let mut all = Vec::with_capacity(self.settings.static_kvs.len() * 2 + kv.len());
            for pair in &self.settings.static_kvs {
                all.push(Value::String(pair.key.clone()));
                all.push(pair.value.clone());
            }
            all.extend_from_slice(kv);
            Cow::Owned(all)
        };

        let line = self.formatter.format(&self.settings, level, message, &kv);
        self.sink.write_line(line)
    }

    #[inline]
    pub fn info(&self, message: &str, kv: &[Value]) -> io::Result<usize> {
        self.log(LogLevel::Info, message, kv)
    }

    #[inline]
    pub fn notice(&self, message: &str, kv: &[Value]) -> io::Result<usize> {
        self.log(LogLevel::Notice, message, kv)
    }

    #[inline]
    pub fn warning(&self, message: &str, kv: &[Value]) -> io::Result<usize> {
        self.log(LogLevel::Warning, message, kv)
    }

    #[inline]
    pub fn error(&self, message: &str, kv: &[Value]) -> io::Result<usize> {
        self.log(LogLevel::Error, message, kv)
    }

    #[inline]
    pub fn fatal(&self, message: &str, kv: &[Value]) -> io::Result<usize> {
        self.log(LogLevel::Fatal, message, kv)
    }

    /// Writes nothing and returns `Ok(0)` unless debug output is enabled
    #[inline]
    pub fn debug(&self, message: &str, kv: &[Value]) -> io::Result<usize> {
        if !self.settings.debug {
            return Ok(0);
        }
        self.log(LogLevel::Debug, message, kv)
    }

    /// Writes nothing and returns `Ok(0)` unless trace output is enabled
    #[inline]
    pub fn trace(&self, message: &str, kv: &[Value]) -> io::Result<usize> {
        if !self.settings.trace {
            return Ok(0);
        }
        self.log(LogLevel::Trace, message, kv)
    }
}

/// Simple format, default options, standard output
impl Default for Logger {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            formatter: Box::new(SimpleFormatter),
            sink: Sink::new(sink::stdout(), WriteGuard::new(true)),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use kv_logging::{JsonFormatter, Logger, TimeFormat};
///
/// let logger = Logger::builder(JsonFormatter)
///     .debug(true)
///     .time_format(TimeFormat::Ansic)
///     .level_key("_LVL")
///     .static_kv("_HOSTNAME", "my-hostname")
///     .writer(std::io::sink())
///     .build()
///     .expect("valid configuration");
/// ```
pub struct LoggerBuilder {
    formatter: Box<dyn Formatter>,
    options: Vec<LogOption>,
}

impl LoggerBuilder {
    pub fn new<F: Formatter + 'static>(formatter: F) -> Self {
        Self::from_boxed(Box::new(formatter))
    }

    pub(crate) fn from_boxed(formatter: Box<dyn Formatter>) -> Self {
        Self {
            formatter,
            options: Vec::new(),
        }
    }

    /// Queue one option
    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LogOption) -> Self {
        self.options.push(option);
        self
    }

    /// Queue several options, keeping their order
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: impl IntoIterator<Item = LogOption>) -> Self {
        self.options.extend(options);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug(self, on: bool) -> Self {
        self.option(options::enable_debug(on))
    }

    #[must_use = "builder methods return a new value"]
    pub fn trace(self, on: bool) -> Self {
        self.option(options::enable_trace(on))
    }

    #[must_use = "builder methods return a new value"]
    pub fn disable_mutex(self, off: bool) -> Self {
        self.option(options::disable_mutex(off))
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(self, format: impl Into<TimeFormat>) -> Self {
        self.option(options::with_time_format(format))
    }

    #[must_use = "builder methods return a new value"]
    pub fn local_time(self, on: bool) -> Self {
        self.option(options::enable_local_time(on))
    }

    #[must_use = "builder methods return a new value"]
    pub fn static_kv(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.option(options::with_static_kv(key, value))
    }

    #[must_use = "builder methods return a new value"]
    pub fn message_key(self, key: impl Into<String>) -> Self {
        self.option(options::with_message_key(key))
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_key(self, key: impl Into<String>) -> Self {
        self.option(options::with_time_key(key))
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_key(self, key: impl Into<String>) -> Self {
        self.option(options::with_level_key(key))
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.option(options::with_writer(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn disable_time(self, off: bool) -> Self {
        self.option(options::disable_time(off))
    }

    #[must_use = "builder methods return a new value"]
    pub fn disable_level(self, off: bool) -> Self {
        self.option(options::disable_level(off))
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(self, clock: impl Clock + 'static) -> Self {
        self.option(options::with_clock(clock))
    }

    /// Apply all options in order and validate the result
    pub fn build(self) -> Result<Logger> {
        let mut draft = Draft::new();
        draft.apply_all(self.options)?;
        let (settings, sink) = draft.finish()?;

        Ok(Logger {
            settings,
            formatter: self.formatter,
            sink,
        })
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use crate::core::timestamp::FixedClock;
    use crate::formatters::JsonFormatter;
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2020, 4, 17, 10, 16, 0).unwrap())
    }

    #[test]
    fn test_builder_basic() {
        let buffer = Buffer::default();
        let logger = Logger::builder(SimpleFormatter)
            .clock(clock())
            .writer(buffer.clone())
            .build()
            .unwrap();

        let n = logger.info("Hello World!", &[]).unwrap();
        let expected = "2020-04-17T10:16:00Z [INF] Hello World!\n";
        assert_eq!(buffer.contents(), expected);
        assert_eq!(n, expected.len());
    }

    #[test]
    fn test_every_level_name() {
        let buffer = Buffer::default();
        let logger = Logger::builder(JsonFormatter)
            .debug(true)
            .trace(true)
            .disable_time(true)
            .writer(buffer.clone())
            .build()
            .unwrap();

        logger.info("m", &[]).unwrap();
        logger.notice("m", &[]).unwrap();
        logger.warning("m", &[]).unwrap();
        logger.error("m", &[]).unwrap();
        logger.fatal("m", &[]).unwrap();
        logger.debug("m", &[]).unwrap();
        logger.trace("m", &[]).unwrap();

        let levels: Vec<String> = buffer
            .contents()
            .lines()
            .map(|line| {
                let v: serde_json::Value = serde_json::from_str(line).unwrap();
                v["LEVEL"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(
            levels,
            vec!["Info", "Notice", "Warning", "Error", "Fatal", "Debug", "Trace"]
        );
    }

    #[test]
    fn test_debug_and_trace_disabled_by_default() {
        let buffer = Buffer::default();
        let logger = Logger::builder(SimpleFormatter)
            .writer(buffer.clone())
            .build()
            .unwrap();

        assert_eq!(logger.debug("This is a debug message", &[]).unwrap(), 0);
        assert_eq!(logger.trace("This is a trace message", &[]).unwrap(), 0);
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_debug_enabled() {
        let buffer = Buffer::default();
        let logger = Logger::builder(SimpleFormatter)
            .debug(true)
            .clock(clock())
            .writer(buffer.clone())
            .build()
            .unwrap();

        logger.debug("This is a debug message", &[]).unwrap();
        assert_eq!(
            buffer.contents(),
            "2020-04-17T10:16:00Z [DEB] This is a debug message\n"
        );
    }

    #[test]
    fn test_static_kvs_prepended_in_order() {
        let buffer = Buffer::default();
        let logger = Logger::builder(SimpleFormatter)
            .time_format(TimeFormat::Stamp)
            .static_kv("hostname", "localhost")
            .static_kv("ip", "127.0.0.1")
            .disable_level(true)
            .clock(clock())
            .writer(buffer.clone())
            .build()
            .unwrap();

        logger.info("Hello World!", &[]).unwrap();
        logger
            .info("Hello \"World\" 2!", &[Value::from("foo"), Value::from(1)])
            .unwrap();

        assert_eq!(
            buffer.contents(),
            "Apr 17 10:16:00 Hello World! HOSTNAME: localhost IP: 127.0.0.1\n\
             Apr 17 10:16:00 Hello \"World\" 2! HOSTNAME: localhost IP: 127.0.0.1 FOO: 1\n"
        );
    }

    #[test]
    fn test_closure_formatter() {
        let buffer = Buffer::default();
        let logger = Logger::new(
            |_: &Settings, level: LogLevel, message: &str, kv: &[Value]| {
                format!("{}|{}|{}", level, message, kv.len())
            },
            vec![options::with_writer(buffer.clone())],
        )
        .unwrap();

        logger.warning("careful", &[Value::from("a"), Value::from(1)]).unwrap();
        assert_eq!(buffer.contents(), "Warning|careful|2\n");
    }

    #[test]
    fn test_build_errors() {
        let err = Logger::new(SimpleFormatter, vec![options::with_time_key("LEVEL")]).unwrap_err();
        assert!(matches!(err, LoggerError::DuplicateFieldKeys { .. }));

        let err = Logger::builder(SimpleFormatter).message_key("").build().unwrap_err();
        assert!(matches!(err, LoggerError::EmptyFieldKey { .. }));
    }

    #[test]
    fn test_default_logger() {
        let logger = Logger::default();
        assert_eq!(logger.settings().message_key(), "MESSAGE");
        assert!(!logger.settings().debug_enabled());
        assert_eq!(logger.debug("hidden", &[]).unwrap(), 0);
    }
}
