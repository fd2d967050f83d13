//! Value adjustment applied before any value is rendered
//!
//! Timestamps become strings in the logger's zone and time format, errors
//! become their message text, and every other value passes through untouched.

use super::settings::Settings;
use super::value::Value;
use std::borrow::Cow;

impl Settings {
    /// Normalize one value for formatting
    ///
    /// Borrowed values are never modified; adjusted values are returned owned.
    pub fn adjust_value<'a>(&self, value: &'a Value) -> Cow<'a, Value> {
        match value {
            Value::Time(t) => Cow::Owned(Value::String(
                self.time_format.format_in_zone(t, self.local_time),
            )),
            Value::Error(e) => Cow::Owned(Value::String(e.to_string())),
            other => Cow::Borrowed(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp::TimeFormat;
    use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};

    fn moment() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 4, 17, 10, 16, 0).unwrap()
    }

    #[test]
    fn test_time_is_rendered_in_utc() {
        let settings = Settings::default();
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let value = Value::from(moment().with_timezone(&offset));

        let adjusted = settings.adjust_value(&value);
        assert_eq!(*adjusted, Value::from("2020-04-17T10:16:00Z"));
        // The original timestamp is left as it was
        assert!(value.is_time());
    }

    #[test]
    fn test_time_by_reference() {
        let settings = Settings::default();
        let t = moment();
        let value = Value::from(&t);
        assert_eq!(
            settings.adjust_value(&value).as_str(),
            Some("2020-04-17T10:16:00Z")
        );
    }

    #[test]
    fn test_time_is_rendered_in_local_zone() {
        let settings = Settings {
            local_time: true,
            ..Settings::default()
        };
        let expected = TimeFormat::Rfc3339.format(&moment().with_timezone(&Local));
        let value = Value::from(moment());
        assert_eq!(settings.adjust_value(&value).as_str(), Some(expected.as_str()));
    }

    #[test]
    fn test_custom_format_roundtrip() {
        let pattern = "%Y-%m-%d %H:%M:%S";
        let settings = Settings {
            time_format: TimeFormat::from(pattern),
            ..Settings::default()
        };
        let value = Value::from(moment());
        let adjusted = settings.adjust_value(&value);
        let text = adjusted.as_str().unwrap();

        let parsed = NaiveDateTime::parse_from_str(text, pattern).unwrap();
        assert_eq!(parsed.and_utc(), moment());
    }

    #[test]
    fn test_error_becomes_message() {
        let settings = Settings::default();
        let value = Value::from(std::io::Error::other("disk on fire"));
        assert_eq!(settings.adjust_value(&value).as_str(), Some("disk on fire"));
    }

    #[test]
    fn test_passthrough_is_borrowed() {
        let settings = Settings::default();
        for value in [Value::from(1), Value::from(true), Value::Null, Value::from("x")] {
            let adjusted = settings.adjust_value(&value);
            assert!(matches!(adjusted, Cow::Borrowed(_)));
            assert_eq!(*adjusted, value);
        }
    }
}
