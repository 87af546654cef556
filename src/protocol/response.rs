//! Response definitions
//!
//! Classifies server lines against the status-code taxonomy.

/// Status of a single server line, recognized by prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 220: greeting on connect
    Greeting,

    /// 110: number of databases that follow
    DatabaseCount,

    /// 150: number of definitions that follow
    DefinitionCount,

    /// 151: a definition block begins
    DefinitionBegins,

    /// 152: a match list begins
    MatchList,

    /// 250 ok: exchange completed
    Ok,

    /// 550 invalid database
    InvalidDatabase,

    /// 552 no match
    NoMatch,

    /// Anything else, passed through as payload
    Payload,
}

/// Prefix table, checked in order
const PREFIXES: &[(&str, Status)] = &[
    ("220", Status::Greeting),
    ("110", Status::DatabaseCount),
    ("150", Status::DefinitionCount),
    ("151", Status::DefinitionBegins),
    ("152", Status::MatchList),
    ("250 ok", Status::Ok),
    ("550 invalid database", Status::InvalidDatabase),
    ("552 no match", Status::NoMatch),
];

impl Status {
    /// Classify a server line by its prefix
    pub fn classify(line: &str) -> Status {
        PREFIXES
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|&(_, status)| status)
            .unwrap_or(Status::Payload)
    }
}
