//! Human-readable format
//!
//! `2020-04-17T10:16:00Z [INF] Hello World! FOO: 1 BAR: true`

use super::quote::quote_unquoted;
use super::{pairs, strip_key, Formatter};
use crate::core::{LogLevel, Settings, Value};

/// Time, bracketed level abbreviation, message, then `KEY: value` pairs.
///
/// Keys are upper-cased; the message and values are escaped without
/// surrounding quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn format(&self, settings: &Settings, level: LogLevel, message: &str, kv: &[Value]) -> String {
        let mut tokens: Vec<String> = Vec::with_capacity(3 + kv.len() / 2);

        if settings.time_enabled() {
            tokens.push(settings.timestamp());
        }
        if settings.level_enabled() {
            tokens.push(format!("[{}]", level.abbreviation()));
        }
        tokens.push(quote_unquoted(message));

        for (key, value) in pairs(kv) {
            let value = settings.adjust_value(value);
            tokens.push(format!(
                "{}: {}",
                strip_key(&key.as_text()).to_uppercase(),
                quote_unquoted(&value.to_string())
            ));
        }

        tokens.join(" ")
    }
}
