//! Control Connection
//!
//! TCP transport to a dictionary server.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{DictError, Result};
use super::{LineChannel, LineTransport};

/// Opens transports for the session controller
pub trait Connector {
    type Transport: LineTransport;

    /// Establish a transport to `host:port`
    fn connect(&self, host: &str, port: u16, config: &Config) -> Result<Self::Transport>;
}

/// Connector producing TCP connections
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Transport = Connection;

    fn connect(&self, host: &str, port: u16, config: &Config) -> Result<Connection> {
        Connection::open(host, port, config)
    }
}

/// A control connection to a dictionary server
pub struct Connection {
    /// Buffered line channel over the split TCP stream
    channel: LineChannel<BufReader<TcpStream>, BufWriter<TcpStream>>,

    /// Host as given by the operator, for error messages
    host: String,

    port: u16,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Resolve `host`, connect with the configured timeout and set
    /// read/write timeouts
    pub fn open(host: &str, port: u16, config: &Config) -> Result<Self> {
        let addrs: Vec<SocketAddr> = match (host, port).to_socket_addrs() {
            Ok(addrs) => addrs.collect(),
            Err(e) => {
                tracing::warn!("Failed to resolve {}: {}", host, e);
                return Err(DictError::HostResolution { host: host.to_string() });
            }
        };
        if addrs.is_empty() {
            return Err(DictError::HostResolution { host: host.to_string() });
        }

        for addr in addrs {
            let attempt = if config.connect_timeout_ms > 0 {
                TcpStream::connect_timeout(&addr, Duration::from_millis(config.connect_timeout_ms))
            } else {
                TcpStream::connect(addr)
            };

            match attempt {
                Ok(stream) => {
                    let mut connection = Self::new(stream, host, port)?;
                    connection.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;
                    tracing::debug!("Connected to {} ({})", host, connection.peer_addr);
                    return Ok(connection);
                }
                Err(e) => tracing::debug!("Connect to {} failed: {}", addr, e),
            }
        }

        Err(DictError::ConnectionFailed {
            host: host.to_string(),
            port,
        })
    }

    /// Wrap an already connected stream
    pub fn new(stream: TcpStream, host: &str, port: u16) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Requests are single short lines
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            channel: LineChannel::new(BufReader::new(read_stream), BufWriter::new(write_stream)),
            host: host.to_string(),
            port,
            peer_addr,
        })
    }

    /// Configure connection timeouts (0 disables a timeout)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let read_stream = self.channel.reader().get_ref();
        let write_stream = self.channel.writer().get_ref();

        if read_ms > 0 {
            read_stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            write_stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Timeouts surface as a failed control connection
    fn map_timeout(&self, err: DictError) -> DictError {
        match err {
            DictError::Io(ref e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                tracing::debug!("Timeout on connection to {}", self.peer_addr);
                DictError::ConnectionFailed {
                    host: self.host.clone(),
                    port: self.port,
                }
            }
            other => other,
        }
    }
}

impl LineTransport for Connection {
    fn send_line(&mut self, line: &str) -> Result<()> {
        self.channel.send_line(line).map_err(|e| self.map_timeout(e))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.channel.read_line().map_err(|e| self.map_timeout(e))
    }

    fn shutdown(&mut self) -> Result<()> {
        match self.channel.writer().get_ref().shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // Peer already went away
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
