//! Response Interpreter
//!
//! Consumes server lines for one pending operation and turns them into
//! user-visible output plus an outcome.
//!
//! ## Line Classes
//! - **Framing** (110, 150, 151, 152): hidden unless debug, then echoed as `<-- line`
//! - **Payload** (anything unrecognized): printed with trailing whitespace removed
//! - **Terminal** (250 ok, 550, 552): ends the exchange
//!
//! ## Define Fallback
//! ```text
//! DEFINE db word ──► 552 no match ──► MATCH * prefix word ──► match listing
//!                └─► 550 invalid database ──► two notices, nothing sent
//! ```
//!
//! Every routine returns only after consuming its terminal line, so the
//! transport is positioned at the start of the next response.

mod exchange;
mod databases;
mod define;
mod matching;

pub use exchange::Exchange;

use crate::protocol::{Command, Strategy};

// =============================================================================
// Output Conventions
// =============================================================================

/// Printed when a DEFINE finds nothing
pub const NO_DEFINITION_NOTICE: &str = "***No definition found***";

/// Printed when the fallback prefix match finds nothing
pub const NO_MATCHES_NOTICE: &str = "****No matches found****";

/// Printed when `match` finds nothing
pub const NO_MATCHING_WORDS_NOTICE: &str = "*****No matching word(s) found*****";

/// Printed when `prefixmatch` finds nothing
pub const NO_PREFIX_MATCHES_NOTICE: &str = "****No matching word(s) found****";

/// Prefix of the first line of each definition block
pub const DEFINITION_MARKER: char = '@';

/// Prefix of echoed requests in debug mode
pub const OUTBOUND_MARKER: &str = "> ";

/// Prefix of echoed framing lines in debug mode
pub const INBOUND_MARKER: &str = "<-- ";

/// Database searched by the define fallback
pub const WILDCARD_DATABASE: &str = "*";

// =============================================================================
// Types
// =============================================================================

/// The operation whose response is being read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOperation {
    ShowDatabases,
    Define { word: String },
    Match { word: String, strategy: Strategy },
    Quit,
}

impl PendingOperation {
    /// The response routine that follows a request
    pub fn for_command(command: &Command) -> Self {
        match command {
            Command::ShowDatabases => PendingOperation::ShowDatabases,
            Command::Define { word, .. } => PendingOperation::Define { word: word.clone() },
            Command::Match { word, strategy, .. } => PendingOperation::Match {
                word: word.clone(),
                strategy: *strategy,
            },
            Command::Quit => PendingOperation::Quit,
        }
    }
}

/// Who asked for a match listing; selects the no-match wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCaller {
    /// Automatic prefix match after a failed DEFINE
    DefineFallback,
    Match,
    PrefixMatch,
}

impl MatchCaller {
    pub fn no_match_notice(&self) -> &'static str {
        match self {
            MatchCaller::DefineFallback => NO_MATCHES_NOTICE,
            MatchCaller::Match => NO_MATCHING_WORDS_NOTICE,
            MatchCaller::PrefixMatch => NO_PREFIX_MATCHES_NOTICE,
        }
    }
}

impl From<Strategy> for MatchCaller {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Exact => MatchCaller::Match,
            Strategy::Prefix => MatchCaller::PrefixMatch,
        }
    }
}

/// Whether the request found what it asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    NoMatch,
}

/// Rendered output of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    /// Lines to print, in order
    pub lines: Vec<String>,

    pub outcome: Outcome,
}

impl Interpretation {
    pub fn is_match(&self) -> bool {
        self.outcome == Outcome::Matched
    }
}
