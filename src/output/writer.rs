//! Stdout writer for report output.

use std::io::{self, ErrorKind, Write};

/// Wrapper around a Write that ignores broken pipe errors (EPIPE).
/// This allows graceful handling when stdout is piped to a command that exits early.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                // Downstream command closed the pipe
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}
