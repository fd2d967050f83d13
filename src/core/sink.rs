//! Destination of formatted lines and the guard serializing writes

use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::io::{self, Write};

/// Something a finished line can be written to from a shared reference.
pub trait LineWriter: Send + Sync {
    /// Write the whole line in one go
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

/// Writer that is itself usable through `&W` (stdout, stderr, files, sockets)
pub struct SharedWriter<W>(W);

impl<W> SharedWriter<W> {
    pub fn new(writer: W) -> Self {
        Self(writer)
    }
}

impl<W> LineWriter for SharedWriter<W>
where
    W: Send + Sync,
    for<'a> &'a W: Write,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (&self.0).write_all(line)
    }
}

/// Writer that needs `&mut` access; always serialized by its own lock
pub struct ExclusiveWriter<W>(Mutex<W>);

impl<W> ExclusiveWriter<W> {
    pub fn new(writer: W) -> Self {
        Self(Mutex::new(writer))
    }
}

impl<W: Write + Send> LineWriter for ExclusiveWriter<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.0.lock().write_all(line)
    }
}

/// Lock held around each write, or nothing when disabled
pub(crate) enum WriteGuard {
    Locked(Mutex<()>),
    Disabled,
}

impl WriteGuard {
    pub(crate) fn new(enabled: bool) -> Self {
        if enabled {
            WriteGuard::Locked(Mutex::new(()))
        } else {
            WriteGuard::Disabled
        }
    }

    pub(crate) fn lock(&self) -> Option<MutexGuard<'_, ()>> {
        match self {
            WriteGuard::Locked(mutex) => Some(mutex.lock()),
            WriteGuard::Disabled => None,
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        matches!(self, WriteGuard::Locked(_))
    }
}

/// The logger's output: a writer plus the guard around it
pub(crate) struct Sink {
    writer: Box<dyn LineWriter>,
    guard: WriteGuard,
}

impl Sink {
    pub(crate) fn new(writer: Box<dyn LineWriter>, guard: WriteGuard) -> Self {
        Self { writer, guard }
    }

    /// Write `line` followed by a newline as a single write, returning the byte count
    pub(crate) fn write_line(&self, mut line: String) -> io::Result<usize> {
        line.push('\n');
        let _guard = self.guard.lock();
        self.writer.write_line(line.as_bytes())?;
        Ok(line.len())
    }

    #[cfg(test)]
    pub(crate) fn is_guarded(&self) -> bool {
        self.guard.is_enabled()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("guarded", &self.guard.is_enabled())
            .finish_non_exhaustive()
    }
}

pub(crate) fn stdout() -> Box<dyn LineWriter> {
    Box::new(SharedWriter::new(io::stdout()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_appends_newline() {
        let buffer = Buffer::default();
        let sink = Sink::new(
            Box::new(ExclusiveWriter::new(buffer.clone())),
            WriteGuard::new(true),
        );

        let n = sink.write_line("hello".to_string()).unwrap();
        assert_eq!(n, 6);
        assert_eq!(&*buffer.0.lock(), b"hello\n");
    }

    #[test]
    fn test_write_error_is_returned_unchanged() {
        let sink = Sink::new(Box::new(ExclusiveWriter::new(Broken)), WriteGuard::new(false));

        let err = sink.write_line("hello".to_string()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "closed");
    }

    #[test]
    fn test_guard_toggle() {
        assert!(WriteGuard::new(true).lock().is_some());
        assert!(WriteGuard::new(false).lock().is_none());

        let sink = Sink::new(stdout(), WriteGuard::new(false));
        assert!(!sink.is_guarded());
    }

    #[test]
    fn test_shared_file_writer() {
        let file = tempfile::tempfile().unwrap();
        let writer = SharedWriter::new(file);
        writer.write_line(b"one\n").unwrap();
        writer.write_line(b"two\n").unwrap();
    }
}
