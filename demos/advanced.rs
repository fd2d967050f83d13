//! Replacing the global logger with a configured JSON logger
//!
//! Prints something like:
//!
//! ```text
//! {"_HOSTNAME":"my-hostname","_IP":"123.123.123.123","_LVL":"Info","_TIME":"Fri Apr 17 11:40:52 2020","_message":"Starting"}
//! {"_HOSTNAME":"my-hostname","_IP":"123.123.123.123","_LVL":"Debug","_TIME":"Fri Apr 17 11:40:52 2020","_message":"calculating sum of a and b","a":2,"b":3}
//! {"_HOSTNAME":"my-hostname","_IP":"123.123.123.123","_LVL":"Notice","_TIME":"Fri Apr 17 11:40:52 2020","_message":"sum of a and b","a":2,"b":3,"sum":5}
//! {"_HOSTNAME":"my-hostname","_IP":"123.123.123.123","_LVL":"Error","_TIME":"Fri Apr 17 11:40:52 2020","_message":"could not do something with error","error":"no such file or directory"}
//! {"_HOSTNAME":"my-hostname","_IP":"123.123.123.123","_LVL":"Info","_TIME":"Fri Apr 17 11:40:52 2020","_message":"Exiting"}
//! ```
//!
//! Run with: cargo run --example advanced

use kv_logging::options::*;
use kv_logging::prelude::*;
use kv_logging::{debug, error, info, notice};
use std::io;

fn main() -> Result<()> {
    let logger = Logger::new(
        JsonFormatter,
        vec![
            enable_debug(true),
            with_time_format(TimeFormat::Ansic),
            enable_local_time(true),
            with_level_key("_LVL"),
            with_time_key("_TIME"),
            with_message_key("_message"),
            with_static_kv("_HOSTNAME", "my-hostname"),
            with_static_kv("_IP", "123.123.123.123"),
            with_writer(io::stdout()),
        ],
    )?;
    set_logger(logger);

    let log = kv_logging::logger();
    info!(log, "Starting")?;

    let (a, b) = (2, 3);
    debug!(log, "calculating sum of a and b", "a", a, "b", b)?;
    let sum = a + b;
    notice!(log, "sum of a and b", "a", a, "b", b, "sum", sum)?;

    match do_something_with_error() {
        Err(err) => error!(log, "could not do something with error", "error", err)?,
        Ok(()) => notice!(log, "successfully done something without error")?,
    };

    info!(log, "Exiting")?;
    Ok(())
}

fn do_something_with_error() -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
}
