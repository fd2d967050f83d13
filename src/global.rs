//! Process-wide default logger
//!
//! Starts out as [`Logger::default`] (simple format to stdout) and can be
//! replaced at any time with [`set_logger`]. The free functions forward to
//! whichever logger is installed when they are called.

use crate::core::{Logger, Value};
use parking_lot::RwLock;
use std::io;
use std::sync::{Arc, OnceLock};

static GLOBAL_LOGGER: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    GLOBAL_LOGGER.get_or_init(|| RwLock::new(Arc::new(Logger::default())))
}

/// Install `logger` as the process-wide logger
pub fn set_logger(logger: Logger) {
    *slot().write() = Arc::new(logger);
}

/// The logger currently installed
pub fn logger() -> Arc<Logger> {
    Arc::clone(&slot().read())
}

pub fn info(message: &str, kv: &[Value]) -> io::Result<usize> {
    logger().info(message, kv)
}

pub fn notice(message: &str, kv: &[Value]) -> io::Result<usize> {
    logger().notice(message, kv)
}

pub fn warning(message: &str, kv: &[Value]) -> io::Result<usize> {
    logger().warning(message, kv)
}

pub fn error(message: &str, kv: &[Value]) -> io::Result<usize> {
    logger().error(message, kv)
}

pub fn fatal(message: &str, kv: &[Value]) -> io::Result<usize> {
    logger().fatal(message, kv)
}

pub fn debug(message: &str, kv: &[Value]) -> io::Result<usize> {
    logger().debug(message, kv)
}

pub fn trace(message: &str, kv: &[Value]) -> io::Result<usize> {
    logger().trace(message, kv)
}
