//! Session Controller
//!
//! Owns the control connection and the selected database, and routes each
//! operation through an [`Exchange`].
//!
//! ## State Machine
//! ```text
//!                 open(host, port)
//!   Disconnected ─────────────────► Connected ──┐ set / dict / define /
//!        ▲                              │       │ match / prefixmatch
//!        └──── close / quit / ──────────┘ ◄─────┘
//!              lost connection
//! ```

use crate::config::Config;
use crate::error::{DictError, Result};
use crate::interpreter::{Exchange, Interpretation, Outcome};
use crate::network::{Connector, LineTransport, TcpConnector};
use crate::protocol::{Command, Strategy};

/// Connection state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected,
}

/// The single interactive session
pub struct Session<C: Connector = TcpConnector> {
    config: Config,

    /// Opens the control connection
    connector: C,

    /// Present only while connected
    connection: Option<C::Transport>,

    /// Database used by define, match and prefixmatch
    database: String,
}

impl Session<TcpConnector> {
    /// Create a disconnected session that connects over TCP
    pub fn new(config: Config) -> Self {
        Self::with_connector(config, TcpConnector)
    }
}

impl<C: Connector> Session<C> {
    /// Create a disconnected session using `connector`
    pub fn with_connector(config: Config, connector: C) -> Self {
        let database = config.default_database.clone();
        Self {
            config,
            connector,
            connection: None,
            database,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        if self.connection.is_some() {
            SessionState::Connected
        } else {
            SessionState::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state() == SessionState::Connected
    }

    /// Currently selected database
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The open transport, if any
    pub fn transport(&self) -> Option<&C::Transport> {
        self.connection.as_ref()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Connect and read the server greeting
    pub fn open(&mut self, host: &str, port: u16) -> Result<Interpretation> {
        if self.is_connected() {
            return Err(DictError::UnexpectedCommand);
        }

        let mut transport = self.connector.connect(host, port, &self.config)?;
        let greeting = match Exchange::new(&mut transport, self.config.debug).greeting() {
            Ok(greeting) => greeting,
            Err(e) => {
                tracing::warn!("No greeting from {}:{}: {}", host, port, e);
                let _ = transport.shutdown();
                return Err(match e {
                    DictError::ConnectionClosed | DictError::Io(_) => DictError::ConnectionFailed {
                        host: host.to_string(),
                        port,
                    },
                    other => other,
                });
            }
        };

        tracing::debug!("Session opened to {}:{}", host, port);
        self.connection = Some(transport);
        self.database = self.config.default_database.clone();
        Ok(greeting)
    }

    /// Send QUIT, read the farewell and release the connection
    pub fn close(&mut self) -> Result<Interpretation> {
        if !self.is_connected() {
            return Err(DictError::UnexpectedCommand);
        }
        Ok(self.quit())
    }

    /// Best-effort close; never fails
    pub fn quit(&mut self) -> Interpretation {
        let debug = self.config.debug;
        let farewell = match self.connection.as_mut() {
            Some(transport) => Exchange::new(transport, debug)
                .perform(&Command::Quit)
                .unwrap_or_else(|e| {
                    tracing::debug!("QUIT handshake failed: {}", e);
                    Interpretation {
                        lines: Vec::new(),
                        outcome: Outcome::NoMatch,
                    }
                }),
            None => Interpretation {
                lines: Vec::new(),
                outcome: Outcome::Matched,
            },
        };
        self.drop_connection();
        farewell
    }

    /// Select the database for later lookups; local only
    pub fn set_database(&mut self, database: impl Into<String>) -> Result<()> {
        if !self.is_connected() {
            return Err(DictError::UnexpectedCommand);
        }
        self.database = database.into();
        Ok(())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// List the server's databases
    pub fn show_databases(&mut self) -> Result<Interpretation> {
        self.perform(Command::ShowDatabases)
    }

    /// Define `word` in the selected database
    pub fn define(&mut self, word: &str) -> Result<Interpretation> {
        self.perform(Command::define(self.database.as_str(), word))
    }

    /// Exact match of `word` in the selected database
    pub fn match_word(&mut self, word: &str) -> Result<Interpretation> {
        self.perform(Command::matching(self.database.as_str(), Strategy::Exact, word))
    }

    /// Prefix match of `word` in the selected database
    pub fn prefix_match(&mut self, word: &str) -> Result<Interpretation> {
        self.perform(Command::matching(self.database.as_str(), Strategy::Prefix, word))
    }

    fn perform(&mut self, command: Command) -> Result<Interpretation> {
        let debug = self.config.debug;
        let transport = self.connection.as_mut().ok_or(DictError::UnexpectedCommand)?;

        match Exchange::new(transport, debug).perform(&command) {
            Ok(interpretation) => Ok(interpretation),
            Err(e) => {
                if e.is_connection_loss() {
                    tracing::warn!("Dropping control connection: {}", e);
                    self.drop_connection();
                }
                Err(e)
            }
        }
    }

    /// Release the transport and reset the selected database
    fn drop_connection(&mut self) {
        if let Some(mut transport) = self.connection.take() {
            if let Err(e) = transport.shutdown() {
                tracing::debug!("Shutdown failed: {}", e);
            }
        }
        self.database = self.config.default_database.clone();
    }
}
