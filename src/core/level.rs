//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a single log line.
///
/// There is no ordering between levels: every level is always written except
/// `Debug` and `Trace`, which each have their own on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Notice,
    Warning,
    Error,
    Fatal,
    Debug,
    Trace,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Info,
        LogLevel::Notice,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Level name as it appears in key-value and JSON output
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Notice => "Notice",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// First three characters of the name, upper-cased (`Warning` -> `WAR`)
    pub fn abbreviation(&self) -> String {
        self.to_str().chars().take(3).collect::<String>().to_uppercase()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "NOTICE" => Ok(LogLevel::Notice),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations() {
        let abbreviations: Vec<String> = LogLevel::ALL.iter().map(|l| l.abbreviation()).collect();
        assert_eq!(
            abbreviations,
            vec!["INF", "NOT", "WAR", "ERR", "FAT", "DEB", "TRA"]
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        for level in LogLevel::ALL {
            let parsed: LogLevel = level.to_str().parse().unwrap();
            assert_eq!(parsed, level);
        }
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
