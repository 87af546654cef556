//! Operator input
//!
//! Tokenizing and validation of one typed line.

use crate::error::{DictError, Result};

/// Command keyword, matched case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Open,
    Dict,
    Set,
    Define,
    Match,
    PrefixMatch,
    Close,
    Quit,
}

impl Verb {
    pub fn parse(token: &str) -> Option<Verb> {
        let verb = match token.to_ascii_lowercase().as_str() {
            "open" => Verb::Open,
            "dict" => Verb::Dict,
            "set" => Verb::Set,
            "define" => Verb::Define,
            "match" => Verb::Match,
            "prefixmatch" => Verb::PrefixMatch,
            "close" => Verb::Close,
            "quit" => Verb::Quit,
            _ => return None,
        };
        Some(verb)
    }

    /// Whether the verb is valid in the given connection state
    pub fn allowed_when(&self, connected: bool) -> bool {
        match self {
            Verb::Quit => true,
            Verb::Open => !connected,
            _ => connected,
        }
    }

    /// Number of arguments the verb takes
    pub fn arity(&self) -> usize {
        match self {
            Verb::Open => 2,
            Verb::Set | Verb::Define | Verb::Match | Verb::PrefixMatch => 1,
            Verb::Dict | Verb::Close | Verb::Quit => 0,
        }
    }
}

/// A validated operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Open { host: String, port: u16 },
    Dict,
    Set { database: String },
    Define { word: String },
    Match { word: String },
    PrefixMatch { word: String },
    Close,
    Quit,
}

impl UserCommand {
    /// Validate argument count and argument values
    pub fn from_parts(verb: Verb, args: &[&str]) -> Result<Self> {
        if args.len() != verb.arity() {
            return Err(DictError::ArgumentCount);
        }

        let command = match verb {
            Verb::Open => {
                let port = args[1]
                    .parse::<u16>()
                    .map_err(|_| DictError::InvalidArgument(args[1].to_string()))?;
                UserCommand::Open {
                    host: args[0].to_string(),
                    port,
                }
            }
            Verb::Dict => UserCommand::Dict,
            Verb::Set => UserCommand::Set {
                database: args[0].to_string(),
            },
            Verb::Define => UserCommand::Define {
                word: args[0].to_string(),
            },
            Verb::Match => UserCommand::Match {
                word: args[0].to_string(),
            },
            Verb::PrefixMatch => UserCommand::PrefixMatch {
                word: args[0].to_string(),
            },
            Verb::Close => UserCommand::Close,
            Verb::Quit => UserCommand::Quit,
        };
        Ok(command)
    }
}

/// Split a line into verb and arguments
///
/// Blank lines and lines whose first token starts with `#` yield `None`.
pub fn tokenize(line: &str) -> Result<Option<(Verb, Vec<&str>)>> {
    let mut tokens = line.split_whitespace();
    let first = match tokens.next() {
        Some(token) if !token.starts_with('#') => token,
        _ => return Ok(None),
    };

    let verb = Verb::parse(first).ok_or(DictError::InvalidCommand)?;
    Ok(Some((verb, tokens.collect())))
}
