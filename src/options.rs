//! Command line options
//!
//! The client accepts a single optional flag, `-d`. Anything else is a
//! startup error (996 or 997) and the binary exits before prompting.

use std::ffi::OsString;

use clap::Parser;

use crate::error::{DictError, Result};

/// Printed once at startup when `-d` is given
pub const DEBUG_BANNER: &str = "Debugging output enabled";

/// Accepted options. Help and version flags are disabled so `-h` and `-V`
/// are rejected like any other unknown option.
#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq)]
#[command(name = "csdict")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Options {
    /// Echo requests and protocol framing lines
    #[arg(short = 'd')]
    pub debug: bool,
}

impl Options {
    /// Parse the full argument list, program name included
    pub fn parse_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if args.len() > 2 {
            return Err(DictError::TooManyOptions);
        }

        Options::try_parse_from(args).map_err(|e| DictError::InvalidOption(e.to_string()))
    }

    /// Startup banner, if any
    pub fn banner(&self) -> Option<&'static str> {
        self.debug.then_some(DEBUG_BANNER)
    }
}
