//! Protocol Module
//!
//! Defines the line-based wire protocol spoken with the dictionary server.
//!
//! ## Protocol Format (simplified DICT, RFC 2229)
//!
//! ### Request Lines
//! ```text
//! SHOW DB
//! DEFINE <database> <word>
//! MATCH <database> <strategy> <word>
//! QUIT
//! ```
//!
//! Every request is a single ASCII line terminated by CRLF.
//!
//! ### Response Lines
//! ```text
//! ┌──────────┬───┬─────────────────────────────┐
//! │ Code (3) │ ␠ │         Message             │
//! └──────────┴───┴─────────────────────────────┘
//! ```
//!
//! Status lines carry a three digit code. Any other line is payload.
//!
//! ### Status Codes
//! - 220: greeting
//! - 110: database count          (framing)
//! - 150: definition count        (framing)
//! - 151: definition begins       (framing)
//! - 152: match list begins       (framing)
//! - 250: ok                      (terminal)
//! - 550: invalid database        (terminal)
//! - 552: no match                (terminal)

mod command;
mod response;
mod codec;

pub use command::{Command, Strategy};
pub use response::Status;
pub use codec::{encode_command, read_line, write_command, write_line, LINE_TERMINATOR, MAX_LINE_LENGTH};
