//! Command definitions
//!
//! Represents the commands this client sends.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Define,
    Match,
    ShowDatabases,
    ShowStrategies,
    ShowInfo,
    Quit,
}

impl CommandType {
    /// Command keyword(s) as sent on the wire
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandType::Define => "DEFINE",
            CommandType::Match => "MATCH",
            CommandType::ShowDatabases => "SHOW DATABASES",
            CommandType::ShowStrategies => "SHOW STRATEGIES",
            CommandType::ShowInfo => "SHOW INFO",
            CommandType::Quit => "QUIT",
        }
    }
}

/// A command to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a word in a database
    Define { database: String, word: String },

    /// Find words matching with a strategy
    Match {
        database: String,
        strategy: String,
        word: String,
    },

    /// List available databases
    ShowDatabases,

    /// List available matching strategies
    ShowStrategies,

    /// Information about one database
    ShowInfo { database: String },

    /// End the session
    Quit,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Define { .. } => CommandType::Define,
            Command::Match { .. } => CommandType::Match,
            Command::ShowDatabases => CommandType::ShowDatabases,
            Command::ShowStrategies => CommandType::ShowStrategies,
            Command::ShowInfo { .. } => CommandType::ShowInfo,
            Command::Quit => CommandType::Quit,
        }
    }

    /// Arguments in wire order
    pub fn args(&self) -> Vec<&str> {
        match self {
            Command::Define { database, word } => vec![database.as_str(), word.as_str()],
            Command::Match {
                database,
                strategy,
                word,
            } => vec![database.as_str(), strategy.as_str(), word.as_str()],
            Command::ShowInfo { database } => vec![database.as_str()],
            Command::ShowDatabases | Command::ShowStrategies | Command::Quit => Vec::new(),
        }
    }
}
