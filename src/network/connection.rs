//! Client Connection
//!
//! The public handle to one DICT server connection.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;

use indexmap::{IndexMap, IndexSet};
use parking_lot::Mutex;

use super::Session;
use crate::config::{Config, DEFAULT_PORT};
use crate::error::{DictError, Result};
use crate::model::{Database, Definition, MatchingStrategy};
use crate::reply;

/// A connection to a DICT server
///
/// ## Concurrency Model
///
/// The server sends exactly one reply stream per connection, so every
/// operation holds the session lock for one full request/response
/// exchange. A `&Connection` can be shared between threads; their
/// operations run one after another.
///
/// ## Lifecycle
///
/// Open after the greeting is read. Closed after [`Connection::close`],
/// on drop, or after an I/O or framing failure leaves the reply stream out
/// of sync. Operations on a closed connection fail with
/// [`DictError::Closed`].
pub struct Connection<R = BufReader<TcpStream>, W = BufWriter<TcpStream>>
where
    R: BufRead,
    W: Write,
{
    /// `None` once closed
    session: Mutex<Option<Session<R, W>>>,

    /// First line sent by the server
    greeting: String,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Connect to `host:port` and read the greeting
    pub fn open(host: &str, port: u16) -> Result<Self> {
        Self::with_config(&Config::builder().host(host).port(port).build())
    }

    /// Connect to `host` on the standard DICT port
    pub fn connect(host: &str) -> Result<Self> {
        Self::open(host, DEFAULT_PORT)
    }

    /// Connect using every setting in `config`
    pub fn with_config(config: &Config) -> Result<Self> {
        Self::establish(Session::connect(config)?)
    }
}

impl<R: BufRead, W: Write> Connection<R, W> {
    /// Run the handshake over an existing transport
    pub fn from_transport(reader: R, writer: W) -> Result<Self> {
        Self::establish(Session::new(reader, writer, "transport"))
    }

    fn establish(mut session: Session<R, W>) -> Result<Self> {
        let greeting = session.handshake()?;
        let peer_addr = session.peer_addr().to_string();

        Ok(Self {
            session: Mutex::new(Some(session)),
            greeting,
            peer_addr,
        })
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    pub fn is_open(&self) -> bool {
        self.session.lock().is_some()
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// All definitions of `word` in `database`
    ///
    /// `Database::all()` searches every database, `Database::first_match()`
    /// stops at the first one with a definition. No match gives an empty
    /// list.
    pub fn define(&self, word: &str, database: &Database) -> Result<Vec<Definition>> {
        self.exchange(|session| reply::define(session, word, database))
    }

    /// Words matching `word` in `database` under `strategy`
    pub fn match_word(
        &self,
        word: &str,
        database: &Database,
        strategy: &MatchingStrategy,
    ) -> Result<IndexSet<String>> {
        self.exchange(|session| reply::match_words(session, word, database, strategy))
    }

    /// Databases offered by the server, keyed by name
    pub fn databases(&self) -> Result<IndexMap<String, Database>> {
        self.exchange(reply::databases)
    }

    /// Matching strategies offered by the server
    pub fn strategies(&self) -> Result<IndexSet<MatchingStrategy>> {
        self.exchange(reply::strategies)
    }

    /// Server's description of `database`
    pub fn database_info(&self, database: &Database) -> Result<String> {
        self.exchange(|session| reply::database_info(session, database))
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Send QUIT and release the connection
    ///
    /// Never fails; teardown errors are logged. Later calls do nothing.
    pub fn close(&self) {
        if let Some(session) = self.session.lock().take() {
            session.quit();
        }
    }

    /// Run one request/response exchange under the session lock
    fn exchange<T>(&self, op: impl FnOnce(&mut Session<R, W>) -> Result<T>) -> Result<T> {
        let mut guard = self.session.lock();
        let session = guard.as_mut().ok_or(DictError::Closed)?;

        let result = op(session);
        if let Err(e) = &result {
            if e.is_fatal() {
                tracing::warn!("Dropping connection to {}: {}", self.peer_addr, e);
                *guard = None;
            }
        }
        result
    }
}

impl<R: BufRead, W: Write> Drop for Connection<R, W> {
    fn drop(&mut self) {
        self.close();
    }
}
