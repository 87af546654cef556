//! Exchange
//!
//! One request/response round trip over a borrowed transport. All output,
//! including the debug echo of requests, is collected here.

use crate::error::{DictError, Result};
use crate::network::LineTransport;
use crate::protocol::{encode_command, Command, Status};
use super::{Interpretation, Outcome, PendingOperation, INBOUND_MARKER, OUTBOUND_MARKER};

/// A single request/response exchange
pub struct Exchange<'a, T: LineTransport + ?Sized> {
    transport: &'a mut T,

    /// Echo requests and framing lines
    debug: bool,

    /// Rendered output so far
    lines: Vec<String>,
}

impl<'a, T: LineTransport + ?Sized> Exchange<'a, T> {
    pub fn new(transport: &'a mut T, debug: bool) -> Self {
        Self {
            transport,
            debug,
            lines: Vec::new(),
        }
    }

    /// Send `command` and read its complete response
    pub fn perform(mut self, command: &Command) -> Result<Interpretation> {
        self.send(command)?;
        let outcome = self.run(&PendingOperation::for_command(command))?;
        Ok(self.finish(outcome))
    }

    /// Read the response to a request that has already been sent
    pub fn interpret(mut self, operation: &PendingOperation) -> Result<Interpretation> {
        let outcome = self.run(operation)?;
        Ok(self.finish(outcome))
    }

    /// Read the greeting sent on connect
    pub fn greeting(mut self) -> Result<Interpretation> {
        let (line, status) = self.receive()?;
        self.echo(&line);

        let outcome = if status == Status::Greeting {
            Outcome::Matched
        } else {
            tracing::warn!("Unexpected greeting: {}", line);
            Outcome::NoMatch
        };
        Ok(self.finish(outcome))
    }

    fn run(&mut self, operation: &PendingOperation) -> Result<Outcome> {
        match operation {
            PendingOperation::ShowDatabases => self.read_databases(),
            PendingOperation::Define { word } => self.read_definitions(word),
            PendingOperation::Match { strategy, .. } => self.read_matches((*strategy).into()),
            PendingOperation::Quit => self.read_farewell(),
        }
    }

    fn finish(self, outcome: Outcome) -> Interpretation {
        Interpretation {
            lines: self.lines,
            outcome,
        }
    }

    // =========================================================================
    // Shared Helpers
    // =========================================================================

    /// Send a request, echoing it first in debug mode
    pub(super) fn send(&mut self, command: &Command) -> Result<()> {
        let request = encode_command(command);
        tracing::debug!("Sending {}", request);
        if self.debug {
            self.lines.push(format!("{}{}", OUTBOUND_MARKER, request));
        }
        self.transport.send_line(&request)
    }

    /// Next line and its status; end of stream is a lost connection
    pub(super) fn receive(&mut self) -> Result<(String, Status)> {
        match self.transport.read_line()? {
            Some(line) => {
                let status = Status::classify(&line);
                Ok((line, status))
            }
            None => Err(DictError::ConnectionClosed),
        }
    }

    /// Show a protocol line in debug mode only
    pub(super) fn echo(&mut self, line: &str) {
        if self.debug {
            self.lines.push(format!("{}{}", INBOUND_MARKER, line));
        }
    }

    /// Always show a line
    pub(super) fn emit(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn read_farewell(&mut self) -> Result<Outcome> {
        if let Some(line) = self.transport.read_line()? {
            self.echo(&line);
        }
        Ok(Outcome::Matched)
    }
}
