//! Network Module
//!
//! TCP transport and the client connection built on it.
//!
//! ## Architecture
//! - [`Session`]: owns the reader/writer pair, greeting and QUIT
//! - [`Connection`]: public handle; serializes exchanges on one session

mod session;
mod connection;

pub use session::Session;
pub use connection::Connection;
