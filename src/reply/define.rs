//! DEFINE reply parser

use std::io::{BufRead, Write};

use super::refusal;
use crate::error::{DictError, Result};
use crate::model::{Database, Definition};
use crate::network::Session;
use crate::protocol::{split_fields, Command, ReplyLine, Status, StatusCode};

/// Look up `word` in `database`
///
/// A "no match" reply gives an empty list. Lines before the first
/// definition are skipped.
pub fn define<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    word: &str,
    database: &Database,
) -> Result<Vec<Definition>> {
    session.send(&Command::Define {
        database: database.name().to_string(),
        word: word.to_string(),
    })?;

    let mut definitions = Vec::new();
    let mut current: Option<Definition> = None;

    for line in session.lines() {
        match line? {
            ReplyLine::Status(status) if status.kind() == StatusCode::DefinitionFollows => {
                definitions.extend(current.take());
                current = Some(open_definition(word, &status)?);
            }
            ReplyLine::Status(status) if status.is_terminal() => {
                if let Some(err) = refusal(&status) {
                    return Err(err);
                }
                definitions.extend(current.take());
                return Ok(definitions);
            }
            // `.` separates definitions; it never ends the reply
            ReplyLine::End => {}
            ReplyLine::Status(status) => {
                if let Some(def) = current.as_mut() {
                    def.append_line(&status.to_string());
                }
            }
            ReplyLine::Text(text) => {
                if let Some(def) = current.as_mut() {
                    def.append_line(&text);
                }
            }
        }
    }

    Err(DictError::UnexpectedEof)
}

/// Start a definition from a `151 word database "description"` line
fn open_definition(word: &str, status: &Status) -> Result<Definition> {
    let database = split_fields(status.text())
        .into_iter()
        .nth(1)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            DictError::Protocol(format!("definition header without database: {}", status))
        })?;

    Ok(Definition::new(word, database))
}
