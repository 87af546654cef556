//! Command definitions
//!
//! Requests sent to the dictionary server.

use std::fmt;

/// Match strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Headword equals the word
    Exact,

    /// Headword starts with the word
    Prefix,
}

impl Strategy {
    /// Name of the strategy on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Prefix => "prefix",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the databases the server offers
    ShowDatabases,

    /// Look up definitions of a word
    Define { database: String, word: String },

    /// Look up headwords matching a word
    Match {
        database: String,
        strategy: Strategy,
        word: String,
    },

    /// End the session
    Quit,
}

impl Command {
    /// Build a DEFINE request
    pub fn define(database: impl Into<String>, word: impl Into<String>) -> Self {
        Command::Define {
            database: database.into(),
            word: word.into(),
        }
    }

    /// Build a MATCH request
    pub fn matching(database: impl Into<String>, strategy: Strategy, word: impl Into<String>) -> Self {
        Command::Match {
            database: database.into(),
            strategy,
            word: word.into(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ShowDatabases => f.write_str("SHOW DB"),
            Command::Define { database, word } => write!(f, "DEFINE {} {}", database, word),
            Command::Match {
                database,
                strategy,
                word,
            } => write!(f, "MATCH {} {} {}", database, strategy, word),
            Command::Quit => f.write_str("QUIT"),
        }
    }
}
