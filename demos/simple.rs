//! Logging through the process-wide default logger
//!
//! Prints something like:
//!
//! ```text
//! 2020-04-17T08:59:51Z [INF] Starting
//! 2020-04-17T08:59:51Z [NOT] sum of a and b A: 2 B: 3 SUM: 5
//! 2020-04-17T08:59:51Z [ERR] could not do something with error ERROR: no such file or directory
//! 2020-04-17T08:59:51Z [INF] Exiting
//! ```
//!
//! Run with: cargo run --example simple

use kv_logging::prelude::*;
use kv_logging::{global, kv};
use std::io;

fn main() -> Result<()> {
    global::info("Starting", &[])?;

    let (a, b, sum) = (2, 3, 5);
    global::notice("sum of a and b", &kv!["a", a, "b", b, "sum", sum])?;

    match do_something_with_error() {
        Err(err) => global::error("could not do something with error", &kv!["error", err])?,
        Ok(()) => global::notice("successfully done something without error", &[])?,
    };

    global::info("Exiting", &[])?;
    Ok(())
}

fn do_something_with_error() -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
}
