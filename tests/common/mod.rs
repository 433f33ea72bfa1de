//! Shared test helpers: scripted in-memory transports.

#![allow(dead_code)]

use std::io::{self, Cursor, Write};
use std::sync::Arc;

use dictwire::Connection;
use parking_lot::Mutex;

pub const GREETING: &str = "220 dict.example.org dictd 1.12.1/rf on Linux <auth.mime> <1.2@dict.example.org>";

/// Connection over a scripted reply stream
pub type ScriptedConnection = Connection<Cursor<Vec<u8>>, SharedWriter>;

/// Writer whose bytes stay readable after it is moved into a connection
#[derive(Clone, Default)]
pub struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl SharedWriter {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Command lines written so far
    pub fn commands(&self) -> Vec<String> {
        self.contents()
            .split("\r\n")
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Join reply lines with CRLF, terminating the last one
pub fn script(lines: &[&str]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for line in lines {
        bytes.extend_from_slice(line.as_bytes());
        bytes.extend_from_slice(b"\r\n");
    }
    bytes
}

/// Open a connection whose server greets and then sends `replies`
pub fn scripted(replies: &[&str]) -> (ScriptedConnection, SharedWriter) {
    init_tracing();

    let mut lines = vec![GREETING];
    lines.extend_from_slice(replies);

    let writer = SharedWriter::default();
    let conn = Connection::from_transport(Cursor::new(script(&lines)), writer.clone())
        .expect("handshake should succeed");
    (conn, writer)
}

/// Install a test subscriber when RUST_LOG is set
pub fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
