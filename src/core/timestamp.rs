//! Timestamp formatting and the clock used for "now"
//!
//! The logger renders both the current time and any timestamp values through
//! a single [`TimeFormat`], after converting to UTC or the local zone.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write as _};
use std::sync::Arc;

/// Pattern used to render timestamps
///
/// # Examples
///
/// ```
/// use kv_logging::TimeFormat;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2020, 4, 17, 10, 16, 0).unwrap();
/// assert_eq!(TimeFormat::Rfc3339.format(&t), "2020-04-17T10:16:00Z");
/// assert_eq!(TimeFormat::Stamp.format(&t), "Apr 17 10:16:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// RFC 3339 with second precision: `2020-04-17T10:16:00Z`, `2020-04-17T12:16:00+02:00`
    #[default]
    Rfc3339,

    /// RFC 3339 with up to nine fractional digits, trailing zeros dropped:
    /// `2020-04-17T10:16:00.12345Z`, `2020-04-17T10:16:00Z`
    Rfc3339Nanos,

    /// `Fri Apr 17 10:16:00 2020`
    Ansic,

    /// `Apr 17 10:16:00`
    Stamp,

    /// Custom strftime format
    ///
    /// ```
    /// use kv_logging::TimeFormat;
    ///
    /// let format = TimeFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// assert!(format.validate().is_ok());
    /// ```
    Custom(String),
}

impl TimeFormat {
    /// Render a timestamp in its own zone
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimeFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimeFormat::Rfc3339Nanos => {
                trim_fraction(datetime.to_rfc3339_opts(SecondsFormat::Nanos, true))
            }
            TimeFormat::Ansic => datetime.format("%a %b %e %H:%M:%S %Y").to_string(),
            TimeFormat::Stamp => datetime.format("%b %e %H:%M:%S").to_string(),
            TimeFormat::Custom(pattern) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(pattern)).is_err() {
                    out = datetime.to_rfc3339_opts(SecondsFormat::Secs, true);
                }
                out
            }
        }
    }

    /// Convert to UTC or the local zone, then render
    #[must_use]
    pub fn format_in_zone<Tz: TimeZone>(&self, datetime: &DateTime<Tz>, local: bool) -> String {
        if local {
            self.format(&datetime.with_timezone(&Local))
        } else {
            self.format(&datetime.with_timezone(&Utc))
        }
    }

    /// Reject custom patterns chrono cannot render
    pub fn validate(&self) -> Result<(), String> {
        match self {
            TimeFormat::Custom(pattern) => {
                if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                    Err(pattern.clone())
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }
}

/// Drop trailing zeros of the fractional seconds, and the dot when none remain
fn trim_fraction(stamp: String) -> String {
    let Some(dot) = stamp.find('.') else {
        return stamp;
    };
    let end = stamp[dot + 1..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(stamp.len(), |i| dot + 1 + i);
    let digits = stamp[dot + 1..end].trim_end_matches('0');
    if digits.is_empty() {
        format!("{}{}", &stamp[..dot], &stamp[end..])
    } else {
        format!("{}.{}{}", &stamp[..dot], digits, &stamp[end..])
    }
}

impl From<&str> for TimeFormat {
    fn from(pattern: &str) -> Self {
        TimeFormat::Custom(pattern.to_string())
    }
}

impl From<String> for TimeFormat {
    fn from(pattern: String) -> Self {
        TimeFormat::Custom(pattern)
    }
}

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant, for reproducible output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

pub(crate) fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}
