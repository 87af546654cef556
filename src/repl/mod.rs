//! Interactive Front End
//!
//! Prompt loop that reads operator commands, validates them and drives the
//! session. Results go to the output stream, numbered errors to the error
//! stream.

mod input;

pub use input::{tokenize, UserCommand, Verb};

use std::io::{BufRead, Write};

use crate::error::{DictError, Result};
use crate::interpreter::Interpretation;
use crate::network::{Connector, TcpConnector};
use crate::session::Session;

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The prompt loop
pub struct Repl<I, O, E, C: Connector = TcpConnector> {
    session: Session<C>,
    input: I,
    out: O,
    err: E,
}

impl<I: BufRead, O: Write, E: Write, C: Connector> Repl<I, O, E, C> {
    pub fn new(session: Session<C>, input: I, out: O, err: E) -> Self {
        Self {
            session,
            input,
            out,
            err,
        }
    }

    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    pub fn into_parts(self) -> (Session<C>, O, E) {
        (self.session, self.out, self.err)
    }

    /// Run until `quit`, end of input, or a fatal error
    ///
    /// Only fatal errors are returned; everything else is reported and the
    /// loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let prompt = self.session.config().prompt.clone();
            self.out
                .write_all(prompt.as_bytes())
                .and_then(|_| self.out.flush())?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    tracing::debug!("End of input");
                    self.dispatch(UserCommand::Quit)?;
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => {
                    let err = DictError::Input(e);
                    self.report(&err);
                    return Err(err);
                }
            }

            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) => {
                    self.report(&e);
                    if e.is_fatal() {
                        return Err(e);
                    }
                }
            }
        }
    }

    /// Validate and execute one line of input
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let (verb, args) = match tokenize(line)? {
            Some(parts) => parts,
            None => return Ok(Flow::Continue),
        };

        if !verb.allowed_when(self.session.is_connected()) {
            return Err(DictError::UnexpectedCommand);
        }

        let command = UserCommand::from_parts(verb, &args)?;
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: UserCommand) -> Result<Flow> {
        tracing::trace!("Dispatching {:?}", command);
        let output = match command {
            UserCommand::Open { host, port } => self.session.open(&host, port)?,
            UserCommand::Dict => self.session.show_databases()?,
            UserCommand::Set { database } => {
                self.session.set_database(database)?;
                return Ok(Flow::Continue);
            }
            UserCommand::Define { word } => self.session.define(&word)?,
            UserCommand::Match { word } => self.session.match_word(&word)?,
            UserCommand::PrefixMatch { word } => self.session.prefix_match(&word)?,
            UserCommand::Close => self.session.close()?,
            UserCommand::Quit => {
                let farewell = self.session.quit();
                self.print(&farewell)?;
                return Ok(Flow::Exit);
            }
        };

        self.print(&output)?;
        Ok(Flow::Continue)
    }

    fn print(&mut self, interpretation: &Interpretation) -> Result<()> {
        for line in &interpretation.lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn report(&mut self, error: &DictError) {
        tracing::debug!("Command failed: {:?}", error);
        if let Err(e) = writeln!(self.err, "{}", error) {
            tracing::warn!("Failed to report error: {}", e);
        }
    }
}
