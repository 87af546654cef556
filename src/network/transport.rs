//! Line Transport
//!
//! The only way the rest of the client talks to the server.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::protocol::{read_line, write_line};

/// Line-oriented, blocking transport over one connection
pub trait LineTransport {
    /// Send one request line
    fn send_line(&mut self, line: &str) -> Result<()>;

    /// Receive one line, or `None` at end of stream
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Release the underlying connection
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: LineTransport + ?Sized> LineTransport for &mut T {
    fn send_line(&mut self, line: &str) -> Result<()> {
        (**self).send_line(line)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }

    fn shutdown(&mut self) -> Result<()> {
        (**self).shutdown()
    }
}

impl<T: LineTransport + ?Sized> LineTransport for Box<T> {
    fn send_line(&mut self, line: &str) -> Result<()> {
        (**self).send_line(line)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }

    fn shutdown(&mut self) -> Result<()> {
        (**self).shutdown()
    }
}

/// Transport over a buffered reader and a writer
pub struct LineChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> LineTransport for LineChannel<R, W> {
    fn send_line(&mut self, line: &str) -> Result<()> {
        tracing::trace!("> {}", line);
        write_line(&mut self.writer, line)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let line = read_line(&mut self.reader)?;
        tracing::trace!("<-- {:?}", line);
        Ok(line)
    }
}
