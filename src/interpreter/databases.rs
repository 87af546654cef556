//! SHOW DB response

use crate::error::Result;
use crate::network::LineTransport;
use crate::protocol::Status;
use super::{Exchange, Outcome};

impl<T: LineTransport + ?Sized> Exchange<'_, T> {
    /// Database listing, terminated by `250 ok`, `552 no match` or
    /// `550 invalid database`
    pub(super) fn read_databases(&mut self) -> Result<Outcome> {
        loop {
            let (line, status) = self.receive()?;
            match status {
                Status::Ok => {
                    self.echo(&line);
                    return Ok(Outcome::Matched);
                }
                Status::NoMatch | Status::InvalidDatabase => {
                    self.echo(&line);
                    return Ok(Outcome::NoMatch);
                }
                Status::DatabaseCount => self.echo(&line),
                _ => self.emit(line.trim_end()),
            }
        }
    }
}
