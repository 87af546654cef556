//! MATCH response

use crate::error::Result;
use crate::network::LineTransport;
use crate::protocol::Status;
use super::{Exchange, MatchCaller, Outcome};

impl<T: LineTransport + ?Sized> Exchange<'_, T> {
    /// Matching headwords, terminated by `250 ok`, `552 no match` or
    /// `550 invalid database`
    pub(super) fn read_matches(&mut self, caller: MatchCaller) -> Result<Outcome> {
        loop {
            let (line, status) = self.receive()?;
            match status {
                Status::MatchList => self.echo(&line),
                Status::Ok => {
                    self.echo(&line);
                    return Ok(Outcome::Matched);
                }
                Status::NoMatch | Status::InvalidDatabase => {
                    self.echo(&line);
                    self.emit(caller.no_match_notice());
                    return Ok(Outcome::NoMatch);
                }
                _ => self.emit(line.trim_end()),
            }
        }
    }
}
