//! Matching strategy descriptor

use std::hash::{Hash, Hasher};

/// A strategy the server uses to find approximate matches
#[derive(Debug, Clone)]
pub struct MatchingStrategy {
    name: String,
    description: String,
}

impl MatchingStrategy {
    /// Selector for the server's default strategy
    pub const DEFAULT: &'static str = ".";

    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn server_default() -> Self {
        Self::new(Self::DEFAULT, "Server default")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for MatchingStrategy {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MatchingStrategy {}

impl Hash for MatchingStrategy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
