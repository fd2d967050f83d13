//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use kv_logging::FixedClock;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory sink that can be inspected after the logger took ownership
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf-8 output")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// 2020-04-17T10:16:00Z
pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2020, 4, 17, 10, 16, 0).unwrap())
}
