//! Line sinks for listing output

use std::io::{self, Write};

/// Destination for listing lines. Lines arrive in traversal order and must be
/// kept in that order.
pub trait LineSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        (**self).emit(line)
    }
}

/// Writes each line followed by a newline to any `io::Write`.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteSink<io::StdoutLock<'static>> {
    /// Sink writing to locked stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}
