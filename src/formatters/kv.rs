//! Quoted key-value format
//!
//! `TIME: "2020-04-17T10:16:00Z" LEVEL: "Info" MESSAGE: "Hello \"World\"!" foo: "1"`

use super::quote::quote;
use super::{pairs, strip_key, Formatter};
use crate::core::{LogLevel, Settings, Value};

/// `key: "value"` tokens: time, level, message, then the pairs in order.
///
/// Every value is a quoted literal, so the line can be split unambiguously.
#[derive(Debug, Clone, Copy, Default)]
pub struct KvFormatter;

impl Formatter for KvFormatter {
    fn format(&self, settings: &Settings, level: LogLevel, message: &str, kv: &[Value]) -> String {
        let mut tokens: Vec<String> = Vec::with_capacity(3 + kv.len() / 2);

        if settings.time_enabled() {
            tokens.push(format!(
                "{}: {}",
                settings.time_key(),
                quote(&settings.timestamp())
            ));
        }
        if settings.level_enabled() {
            tokens.push(format!("{}: {}", settings.level_key(), quote(level.to_str())));
        }
        tokens.push(format!("{}: {}", settings.message_key(), quote(message)));

        for (key, value) in pairs(kv) {
            let value = settings.adjust_value(value);
            tokens.push(format!(
                "{}: {}",
                strip_key(&key.as_text()),
                quote(&value.to_string())
            ));
        }

        tokens.join(" ")
    }
}
