//! Shared test helpers
//!
//! Scripted transports that replay canned server lines and record every
//! request the client sends.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Cursor;
use std::rc::Rc;

use csdict::network::{Connector, LineChannel, LineTransport};
use csdict::{Config, DictError, Result};

// =============================================================================
// In-memory Channel
// =============================================================================

pub type MemoryChannel = LineChannel<Cursor<Vec<u8>>, Vec<u8>>;

/// Channel whose reader yields `lines`, CRLF terminated
pub fn channel(lines: &[&str]) -> MemoryChannel {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push_str("\r\n");
    }
    LineChannel::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Requests written to a channel so far
pub fn written(channel: &MemoryChannel) -> Vec<String> {
    String::from_utf8_lossy(channel.writer())
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Scripted Connector
// =============================================================================

/// What the scripted server observed
#[derive(Debug, Default)]
pub struct Wire {
    pub sent: Vec<String>,
    pub connects: Vec<(String, u16)>,
    pub shutdowns: usize,
}

pub struct ScriptedTransport {
    replies: VecDeque<String>,
    wire: Rc<RefCell<Wire>>,
}

impl LineTransport for ScriptedTransport {
    fn send_line(&mut self, line: &str) -> Result<()> {
        self.wire.borrow_mut().sent.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.replies.pop_front())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.wire.borrow_mut().shutdowns += 1;
        Ok(())
    }
}

/// Connector that replays the same script on every connect
pub struct ScriptedConnector {
    replies: Vec<String>,
    failure: RefCell<Option<DictError>>,
    wire: Rc<RefCell<Wire>>,
}

impl ScriptedConnector {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|s| s.to_string()).collect(),
            failure: RefCell::new(None),
            wire: Rc::new(RefCell::new(Wire::default())),
        }
    }

    /// The next connect fails with `error`
    pub fn failing(error: DictError) -> Self {
        let connector = Self::new(&[]);
        *connector.failure.borrow_mut() = Some(error);
        connector
    }

    pub fn wire(&self) -> Rc<RefCell<Wire>> {
        Rc::clone(&self.wire)
    }
}

impl Connector for ScriptedConnector {
    type Transport = ScriptedTransport;

    fn connect(&self, host: &str, port: u16, _config: &Config) -> Result<ScriptedTransport> {
        self.wire.borrow_mut().connects.push((host.to_string(), port));
        if let Some(error) = self.failure.borrow_mut().take() {
            return Err(error);
        }
        Ok(ScriptedTransport {
            replies: self.replies.iter().cloned().collect(),
            wire: Rc::clone(&self.wire),
        })
    }
}

pub fn sent(wire: &Rc<RefCell<Wire>>) -> Vec<String> {
    wire.borrow().sent.clone()
}
