//! Transport Session
//!
//! Owns the reader/writer pair of one server connection and performs the
//! greeting handshake and QUIT teardown.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};

use crate::config::Config;
use crate::error::{DictError, Result};
use crate::protocol::{
    finish_reply, read_line, read_reply_line, read_section_line, write_command, Command, ReplyLine,
    ReplyLines, Status,
};

/// One open exchange channel with a DICT server
pub struct Session<R, W> {
    /// Reply stream (buffered)
    reader: R,

    /// Command stream (buffered, flushed per command)
    writer: W,

    /// Peer address for logging
    peer_addr: String,
}

impl Session<BufReader<TcpStream>, BufWriter<TcpStream>> {
    /// Resolve and connect to the configured server
    ///
    /// Every resolved address is tried in turn; the first that accepts
    /// the connection is used.
    pub fn connect(config: &Config) -> Result<Self> {
        let address = config.address();
        let addrs = (config.host.as_str(), config.port)
            .to_socket_addrs()
            .map_err(|e| DictError::Connection(format!("cannot resolve {}: {}", address, e)))?;

        let mut last_error = None;
        let mut connected = None;
        for addr in addrs {
            let attempt = match config.connect_timeout() {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => {
                    connected = Some(stream);
                    break;
                }
                Err(e) => {
                    tracing::debug!("Connect to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        let stream = connected.ok_or_else(|| match last_error {
            Some(e) => DictError::Connection(format!("cannot connect to {}: {}", address, e)),
            None => DictError::Connection(format!("no addresses found for {}", address)),
        })?;

        Self::from_stream(stream, config)
            .map_err(|e| DictError::Connection(format!("cannot set up {}: {}", address, e)))
    }

    fn from_stream(stream: TcpStream, config: &Config) -> std::io::Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        stream.set_nodelay(config.nodelay)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;

        Ok(Self::new(
            BufReader::new(read_stream),
            BufWriter::new(stream),
            peer_addr,
        ))
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Wrap an already-established transport
    pub fn new(reader: R, writer: W, peer_addr: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            peer_addr: peer_addr.into(),
        }
    }

    /// Read the server greeting
    ///
    /// Any non-empty line is accepted; its status code is not checked.
    pub fn handshake(&mut self) -> Result<String> {
        let greeting = read_line(&mut self.reader).map_err(|e| match e {
            DictError::UnexpectedEof => {
                DictError::Connection(format!("no greeting from {}", self.peer_addr))
            }
            other => DictError::Connection(format!(
                "reading greeting from {}: {}",
                self.peer_addr, other
            )),
        })?;

        if greeting.trim().is_empty() {
            return Err(DictError::Connection(format!(
                "empty greeting from {}",
                self.peer_addr
            )));
        }

        tracing::debug!("Connected to {}: {}", self.peer_addr, greeting);
        Ok(greeting)
    }

    /// Send one command line
    pub fn send(&mut self, command: &Command) -> Result<()> {
        write_command(&mut self.writer, command)
    }

    /// Read and classify the next line
    pub fn next_line(&mut self) -> Result<ReplyLine> {
        read_reply_line(&mut self.reader)
    }

    /// Read and classify the next line of an open text section
    pub fn next_section_line(&mut self) -> Result<ReplyLine> {
        read_section_line(&mut self.reader)
    }

    /// Remaining lines of the current reply, through its terminal status
    pub fn lines(&mut self) -> ReplyLines<'_, R> {
        ReplyLines::new(&mut self.reader)
    }

    /// Like [`Session::lines`], starting inside an open text section
    pub fn section_lines(&mut self) -> ReplyLines<'_, R> {
        ReplyLines::within_section(&mut self.reader)
    }

    /// Discard lines up to and including the terminal status
    pub fn finish_reply(&mut self) -> Result<Status> {
        finish_reply(&mut self.reader)
    }

    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Best-effort teardown: send QUIT and release the transport
    ///
    /// Failures are logged and otherwise ignored.
    pub fn quit(mut self) {
        match self.send(&Command::Quit) {
            Ok(()) => tracing::debug!("Closed connection to {}", self.peer_addr),
            Err(e) => tracing::warn!("QUIT to {} failed: {}", self.peer_addr, e),
        }
    }
}
