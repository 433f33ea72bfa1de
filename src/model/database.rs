//! Database descriptor

use std::hash::{Hash, Hasher};

/// A database the server can search
///
/// Identity is the name; two databases with the same name compare equal
/// whatever their descriptions.
#[derive(Debug, Clone)]
pub struct Database {
    name: String,
    description: String,
}

impl Database {
    /// Selector meaning "search all databases"
    pub const ALL: &'static str = "*";

    /// Selector meaning "stop at the first database with a match"
    pub const FIRST_MATCH: &'static str = "!";

    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The `*` selector
    pub fn all() -> Self {
        Self::new(Self::ALL, "All databases")
    }

    /// The `!` selector
    pub fn first_match() -> Self {
        Self::new(Self::FIRST_MATCH, "First database with a match")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// True for the `*` and `!` selectors, which name no real database
    pub fn is_sentinel(&self) -> bool {
        self.name == Self::ALL || self.name == Self::FIRST_MATCH
    }
}

impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Database {}

impl Hash for Database {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
