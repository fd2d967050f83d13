//! JSON format
//!
//! One object per line with keys in sorted order:
//! `{"LEVEL":"Info","MESSAGE":"Hello World!","TIME":"2020-04-17T10:16:00Z","foo":1}`

use super::{pairs, Formatter};
use crate::core::{LogLevel, Settings, Value};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io;

/// Single-line JSON object holding message, level, time and every pair.
///
/// A pair whose key repeats an earlier key (including the message, level
/// and time keys) replaces it. When a value cannot be encoded the line is
/// `JSON ERROR: <reason>` instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, settings: &Settings, level: LogLevel, message: &str, kv: &[Value]) -> String {
        let mut fields: BTreeMap<Cow<'_, str>, Cow<'_, Value>> = BTreeMap::new();

        fields.insert(
            Cow::Borrowed(settings.message_key()),
            Cow::Owned(Value::from(message)),
        );
        if settings.level_enabled() {
            fields.insert(
                Cow::Borrowed(settings.level_key()),
                Cow::Owned(Value::from(level.to_str())),
            );
        }
        if settings.time_enabled() {
            fields.insert(
                Cow::Borrowed(settings.time_key()),
                Cow::Owned(Value::String(settings.timestamp())),
            );
        }
        for (key, value) in pairs(kv) {
            fields.insert(key.as_text(), settings.adjust_value(value));
        }

        match encode(&fields) {
            Ok(line) => line,
            Err(err) => format!("JSON ERROR: {}", err.to_string().replace('\n', " ")),
        }
    }
}

fn encode<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, HtmlSafe);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Compact output that additionally escapes `<`, `>`, `&`, U+2028 and U+2029,
/// so lines can be embedded in HTML or JavaScript unchanged.
struct HtmlSafe;

impl serde_json::ser::Formatter for HtmlSafe {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = index + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_text(value).as_bytes())
    }
}

/// Shortest text for a finite float: plain decimal for `1e-6 <= |v| < 1e21`
/// (and zero), otherwise `1e+21` / `1e-7` exponent form.
fn float_text(value: f64) -> String {
    let abs = value.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        return format!("{}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{}e{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}e+{:0>2}", mantissa, exponent),
        None => scientific,
    }
}
