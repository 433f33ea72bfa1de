//! SHOW INFO reply parser

use std::io::{BufRead, Write};

use super::refusal;
use crate::error::{DictError, Result};
use crate::model::Database;
use crate::network::Session;
use crate::protocol::{Command, ReplyLine, StatusCode};

/// Fetch the server's free-text description of `database`
///
/// The `*` and `!` selectors give an empty string and nothing is sent.
pub fn database_info<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    database: &Database,
) -> Result<String> {
    if database.is_sentinel() {
        return Ok(String::new());
    }

    session.send(&Command::ShowInfo {
        database: database.name().to_string(),
    })?;

    // Header line (normally `112 information for <db>`)
    let in_section = match session.next_line()? {
        ReplyLine::Status(status) => {
            if let Some(err) = refusal(&status) {
                return Err(err);
            }
            if status.is_terminal() {
                return Ok(String::new());
            }
            status.kind().opens_section()
        }
        _ => false,
    };

    let lines = if in_section {
        session.section_lines()
    } else {
        session.lines()
    };

    let mut info = String::new();
    for line in lines {
        match line? {
            ReplyLine::Status(status) if status.kind() == StatusCode::Ok => return Ok(info),
            ReplyLine::Status(status) if status.is_terminal() => {
                return Err(refusal(&status).unwrap_or_else(|| {
                    DictError::Protocol(format!("unexpected end of information: {}", status))
                }));
            }
            ReplyLine::Status(status) => {
                info.push_str(&status.to_string());
                info.push('\n');
            }
            ReplyLine::Text(text) => {
                info.push_str(&text);
                info.push('\n');
            }
            ReplyLine::End => {}
        }
    }

    Err(DictError::UnexpectedEof)
}
