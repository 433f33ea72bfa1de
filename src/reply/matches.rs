//! MATCH reply parser

use std::io::{BufRead, Write};

use indexmap::IndexSet;

use super::{open_reply, read_section};
use crate::error::{DictError, Result};
use crate::model::{Database, MatchingStrategy};
use crate::network::Session;
use crate::protocol::{quoted_field, Command, StatusCode};

/// Find words in `database` matching `word` under `strategy`
///
/// Words keep the order the server listed them in; a word reported by
/// several databases appears once.
pub fn match_words<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    word: &str,
    database: &Database,
    strategy: &MatchingStrategy,
) -> Result<IndexSet<String>> {
    session.send(&Command::Match {
        database: database.name().to_string(),
        strategy: strategy.name().to_string(),
        word: word.to_string(),
    })?;

    let mut words = IndexSet::new();
    if open_reply(session, StatusCode::MatchesFound)?.is_none() {
        return Ok(words);
    }

    read_section(session, |line| {
        let (_, matched) = quoted_field(line)
            .ok_or_else(|| DictError::Protocol(format!("match line without quoted word: {}", line)))?;
        words.insert(matched.to_string());
        Ok(())
    })?;

    Ok(words)
}
