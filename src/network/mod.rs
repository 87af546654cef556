//! Network Module
//!
//! Line transport and TCP control connection.
//!
//! ## Architecture
//! - `LineTransport`: send a line / receive a line or end of stream
//! - `LineChannel`: the transport over any buffered reader and writer
//! - `Connection`: the transport over a TCP stream with timeouts
//! - `Connector`: opens transports for the session controller

mod transport;
mod connection;

pub use transport::{LineChannel, LineTransport};
pub use connection::{Connection, Connector, TcpConnector};
