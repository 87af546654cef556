//! Protocol codec
//!
//! Encoding of requests and line framing for the wire protocol.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────┬──────┐
//! │              Text                   │ CRLF │
//! └─────────────────────────────────────┴──────┘
//! ```
//!
//! Incoming lines may end in LF or CRLF; both are stripped.

use std::io::{BufRead, Read, Write};

use crate::error::{DictError, Result};
use super::Command;

/// Terminator appended to every request line
pub const LINE_TERMINATOR: &str = "\r\n";

/// Maximum accepted length of a single server line (64 KB)
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command to its request line (without terminator)
pub fn encode_command(command: &Command) -> String {
    command.to_string()
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write one line followed by CRLF, then flush
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(LINE_TERMINATOR.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    write_line(writer, &encode_command(command))
}

/// Read one line from a stream
///
/// Returns `None` at end of stream. The line terminator is stripped.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = reader
        .by_ref()
        .take(MAX_LINE_LENGTH as u64 + 1)
        .read_until(b'\n', &mut buf)?;

    if read == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if buf.len() > MAX_LINE_LENGTH {
        return Err(DictError::Protocol(format!(
            "Line too long: more than {} bytes",
            MAX_LINE_LENGTH
        )));
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
