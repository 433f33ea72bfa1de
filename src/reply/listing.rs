//! SHOW DATABASES / SHOW STRATEGIES reply parsers
//!
//! Both listings share one line shape: `name "description"`.

use std::io::{BufRead, Write};

use indexmap::{IndexMap, IndexSet};

use super::{open_reply, read_section};
use crate::error::{DictError, Result};
use crate::model::{Database, MatchingStrategy};
use crate::network::Session;
use crate::protocol::{quoted_field, Command, StatusCode};

/// List the server's databases, keyed by name
pub fn databases<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<IndexMap<String, Database>> {
    session.send(&Command::ShowDatabases)?;

    let entries = read_listing(session, StatusCode::DatabasesPresent)?;
    Ok(entries
        .into_iter()
        .map(|(name, description)| (name.clone(), Database::new(name, description)))
        .collect())
}

/// List the server's matching strategies
pub fn strategies<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<IndexSet<MatchingStrategy>> {
    session.send(&Command::ShowStrategies)?;

    let mut strategies = IndexSet::new();
    for (name, description) in read_listing(session, StatusCode::StrategiesAvailable)? {
        strategies.replace(MatchingStrategy::new(name, description));
    }
    Ok(strategies)
}

/// Parse `name "description"` lines
///
/// The line right after the status may be a bare count line, which is
/// skipped when it carries no quoted field.
fn read_listing<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    expected: StatusCode,
) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();
    if open_reply(session, expected)?.is_none() {
        return Ok(entries);
    }

    let mut first = true;
    read_section(session, |line| {
        let is_first = std::mem::replace(&mut first, false);
        match quoted_field(line) {
            Some((name, description)) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(DictError::Protocol(format!("listing entry without name: {}", line)));
                }
                entries.push((name.to_string(), description.to_string()));
                Ok(())
            }
            None if is_first => Ok(()),
            None => Err(DictError::Protocol(format!(
                "listing entry without quoted description: {}",
                line
            ))),
        }
    })?;

    Ok(entries)
}
