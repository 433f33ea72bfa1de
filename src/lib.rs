//! # dictwire
//!
//! A blocking client for the DICT dictionary lookup protocol (RFC 2229):
//! - Word definitions (DEFINE)
//! - Approximate word matching (MATCH)
//! - Database and strategy listings (SHOW DATABASES / SHOW STRATEGIES)
//! - Database information (SHOW INFO)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Connection                              │
//! │            (Mutex: one exchange at a time)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Reply Parsers                              │
//! │     DEFINE │ MATCH │ SHOW DB │ SHOW STRAT │ SHOW INFO        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │              Protocol Codec (line framing)                   │
//! │         Status │ Text │ End (".")                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │    Session    │
//!               │ (TCP stream)  │
//!               └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use dictwire::{Connection, Database};
//!
//! let conn = Connection::connect("dict.org")?;
//! for def in conn.define("hello", &Database::all())? {
//!     println!("[{}] {}", def.database(), def.body());
//! }
//! conn.close();
//! # Ok::<(), dictwire::DictError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod protocol;
pub mod network;
pub mod reply;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DictError, Result};
pub use config::{Config, DEFAULT_PORT};
pub use model::{Database, Definition, MatchingStrategy};
pub use network::Connection;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dictwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
