//! Model Module
//!
//! Plain data carriers for lookup results.
//!
//! ## Types
//! - [`Database`]: a named lexical source on the server
//! - [`MatchingStrategy`]: a named word-matching algorithm
//! - [`Definition`]: one definition of a word from one database

mod database;
mod strategy;
mod definition;

pub use database::Database;
pub use strategy::MatchingStrategy;
pub use definition::Definition;
