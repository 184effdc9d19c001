//! Client Connection
//!
//! Owns one TCP connection to the server.

use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{RespError, Result};
use crate::protocol::{decode_reply, write_command, Command, Reply};

/// A connected client
///
/// One request is outstanding at a time: `send` a command, then
/// `read_reply` its answer. The buffered reader lives as long as the
/// connection so bytes read past one reply are kept for the next.
pub struct Client {
    /// TCP stream reader (buffered for lookahead)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered so a frame goes out in one write)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Client {
    /// Connect to the server named by `config`
    pub fn connect(config: &Config) -> Result<Self> {
        let addr = config.addr();
        let candidates: Vec<SocketAddr> = addr.to_socket_addrs()?.collect();
        if candidates.is_empty() {
            return Err(RespError::Config(format!(
                "{} did not resolve to any address",
                addr
            )));
        }

        let stream = dial(&candidates, config.connect_timeout())?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| addr.clone());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        tracing::debug!("Connected to {}", peer_addr);

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
        })
    }

    /// Send one command frame
    pub fn send(&mut self, command: &Command) -> Result<()> {
        tracing::trace!(
            "Sending {} to {} ({} args)",
            String::from_utf8_lossy(command.name()),
            self.peer_addr,
            command.args().len()
        );

        write_command(&mut self.writer, command).map_err(|e| {
            tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
            e
        })
    }

    /// Block until one complete reply has been read
    pub fn read_reply(&mut self) -> Result<Reply> {
        decode_reply(&mut self.reader).map_err(|e| {
            tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
            e
        })
    }

    /// Send a command and wait for its reply
    pub fn request(&mut self, command: &Command) -> Result<Reply> {
        self.send(command)?;
        self.read_reply()
    }

    /// Flush and shut the socket down in both directions
    pub fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        match self.reader.get_ref().shutdown(Shutdown::Both) {
            // Peer already hung up
            Err(e) if e.kind() == ErrorKind::NotConnected => {}
            other => other?,
        }
        tracing::debug!("Closed connection to {}", self.peer_addr);
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Try each resolved address in turn
fn dial(candidates: &[SocketAddr], timeout: Option<Duration>) -> Result<TcpStream> {
    let mut last_err = None;

    for addr in candidates {
        let attempt = match timeout {
            Some(timeout) => TcpStream::connect_timeout(addr, timeout),
            None => TcpStream::connect(addr),
        };
        match attempt {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!("Connect to {} failed: {}", addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err
        .map(RespError::Io)
        .unwrap_or_else(|| RespError::Config("no address to connect to".to_string())))
}
