//! Line formatters
//!
//! A formatter turns one log event into one line of text. It reads the
//! logger's [`Settings`] and holds no state of its own, so the same formatter
//! can run on many threads at once.

pub mod json;
pub mod kv;
pub mod quote;
pub mod simple;

pub use json::JsonFormatter;
pub use kv::KvFormatter;
pub use simple::SimpleFormatter;

use crate::core::{LogLevel, Settings, Value};
use std::borrow::Cow;
use std::fmt;

/// Renders a level, message and key/value list into a single line (without newline).
pub trait Formatter: Send + Sync {
    fn format(&self, settings: &Settings, level: LogLevel, message: &str, kv: &[Value]) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&Settings, LogLevel, &str, &[Value]) -> String + Send + Sync,
{
    fn format(&self, settings: &Settings, level: LogLevel, message: &str, kv: &[Value]) -> String {
        self(settings, level, message, kv)
    }
}

/// Key of one pair: the given string, or a placeholder when the entry in key
/// position was not a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key<'a> {
    Named(&'a str),
    Invalid(usize),
}

impl<'a> Key<'a> {
    pub fn as_text(&self) -> Cow<'a, str> {
        match self {
            Key::Named(name) => Cow::Borrowed(*name),
            Key::Invalid(index) => Cow::Owned(format!("_invalid_string_{}", index)),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Walk a flat key/value list two entries at a time.
///
/// A trailing key without a value is ignored.
pub fn pairs(kv: &[Value]) -> impl Iterator<Item = (Key<'_>, &Value)> {
    kv.chunks_exact(2).enumerate().map(|(index, pair)| {
        let key = match pair[0].as_str() {
            Some(name) => Key::Named(name),
            None => Key::Invalid(index),
        };
        (key, &pair[1])
    })
}

/// Remove `:`, `"` and newlines from a key name
pub fn strip_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, ':' | '"' | '\n'))
        .collect()
}
