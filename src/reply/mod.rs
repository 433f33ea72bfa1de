//! Reply Parsers
//!
//! One parser per command. Each sends its command over a [`Session`] and
//! consumes the reply up to and including its terminal status line.
//!
//! ## Reply Shapes
//! ```text
//! DEFINE            MATCH              SHOW DB / STRAT     SHOW INFO
//! 150 n retrieved   152 n matches      110 n present       112 info follows
//! 151 w db "desc"   db "word"          name "desc"         text
//! text              db "word"          name "desc"         text
//! .                 .                  .                   .
//! 151 w db "desc"   250 ok             250 ok              250 ok
//! text
//! .
//! 250 ok
//! ```

mod define;
mod matches;
mod listing;
mod info;

pub use define::define;
pub use matches::match_words;
pub use listing::{databases, strategies};
pub use info::database_info;

use std::io::{BufRead, Write};

use crate::error::{DictError, Result};
use crate::network::Session;
use crate::protocol::{ReplyLine, Status, StatusCode};

/// Map a refusal status to its error
///
/// Returns `None` for positive replies and for the "nothing found" codes,
/// which are empty results rather than failures.
pub(crate) fn refusal(status: &Status) -> Option<DictError> {
    if !status.is_error() || status.kind().is_empty_result() {
        return None;
    }
    Some(match status.kind() {
        StatusCode::NotImplemented => DictError::NotImplemented(status.text().to_string()),
        _ => DictError::Server {
            code: status.code(),
            message: status.text().to_string(),
        },
    })
}

/// Read the status line opening a reply
///
/// Returns `Some` when it carries the `expected` code and `None` when the
/// server answered with some other status that leaves nothing to parse.
fn open_reply<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    expected: StatusCode,
) -> Result<Option<Status>> {
    match session.next_line()? {
        ReplyLine::Status(status) if status.kind() == expected => Ok(Some(status)),
        ReplyLine::Status(status) => {
            if let Some(err) = refusal(&status) {
                return Err(err);
            }
            if !status.is_terminal() {
                let rest = if status.kind().opens_section() {
                    session.section_lines()
                } else {
                    session.lines()
                };
                for line in rest {
                    line?;
                }
            }
            Ok(None)
        }
        other => Err(DictError::Protocol(format!(
            "expected a status line, got {:?}",
            other
        ))),
    }
}

/// Feed every line of a text section to `handle`, then consume the
/// reply's terminal status
///
/// Status-shaped lines inside the section are passed through as text; a
/// `250 ok` before the `.` leaves the section unterminated.
fn read_section<R, W, F>(session: &mut Session<R, W>, mut handle: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<()>,
{
    loop {
        match session.next_section_line()? {
            ReplyLine::End => break,
            ReplyLine::Text(line) => handle(&line)?,
            ReplyLine::Status(status) => {
                return Err(DictError::Protocol(format!(
                    "reply ended inside a text section: {}",
                    status
                )));
            }
        }
    }

    session.finish_reply()?;
    Ok(())
}
