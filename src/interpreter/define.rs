//! DEFINE response
//!
//! Definition blocks are announced by a `151` line. That line is metadata
//! (echoed word, database name and description); the first payload line
//! after it carries the `@` marker instead.

use crate::error::Result;
use crate::network::LineTransport;
use crate::protocol::{Command, Status, Strategy};
use super::{
    Exchange, MatchCaller, Outcome, DEFINITION_MARKER, NO_DEFINITION_NOTICE, NO_MATCHES_NOTICE,
    WILDCARD_DATABASE,
};

impl<T: LineTransport + ?Sized> Exchange<'_, T> {
    /// Definitions of `word`, falling back to a wildcard prefix match
    /// when the server reports no match
    pub(super) fn read_definitions(&mut self, word: &str) -> Result<Outcome> {
        // Set between a 151 line and the first line of its block
        let mut block_pending = false;

        loop {
            let (line, status) = self.receive()?;
            match status {
                Status::DefinitionCount => self.echo(&line),
                Status::DefinitionBegins => {
                    self.close_empty_block(&mut block_pending);
                    self.echo(&line);
                    block_pending = true;
                }
                Status::Ok => {
                    self.close_empty_block(&mut block_pending);
                    self.echo(&line);
                    return Ok(Outcome::Matched);
                }
                Status::NoMatch => {
                    self.echo(&line);
                    self.emit(NO_DEFINITION_NOTICE);

                    let fallback = Command::matching(WILDCARD_DATABASE, Strategy::Prefix, word);
                    self.send(&fallback)?;
                    self.read_matches(MatchCaller::DefineFallback)?;
                    return Ok(Outcome::NoMatch);
                }
                Status::InvalidDatabase => {
                    self.echo(&line);
                    self.emit(NO_DEFINITION_NOTICE);
                    self.emit(NO_MATCHES_NOTICE);
                    return Ok(Outcome::NoMatch);
                }
                _ => {
                    let text = line.trim_end();
                    if block_pending {
                        block_pending = false;
                        self.emit(format!("{}{}", DEFINITION_MARKER, text));
                    } else {
                        self.emit(text);
                    }
                }
            }
        }
    }

    /// A block with no payload still shows its marker
    fn close_empty_block(&mut self, block_pending: &mut bool) {
        if std::mem::take(block_pending) {
            self.emit(DEFINITION_MARKER.to_string());
        }
    }
}
