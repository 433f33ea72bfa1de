//! Protocol codec
//!
//! Encoding of command lines and line-at-a-time decoding of replies.
//!
//! ## Wire Format
//!
//! ### Command
//! ```text
//! KEYWORD arg1 arg2 ...\r\n
//! ```
//! Arguments containing whitespace, quotes or backslashes are sent as a
//! double-quoted string with `"` and `\` escaped.
//!
//! ### Reply
//! ```text
//! 152 2 matches found          <- status line (opens a section)
//! wn "hello"                   <- text
//! wn "hallo"
//! .                            <- section end
//! 250 ok                       <- status line (terminal)
//! ```
//!
//! Inside a section every line is text, even one shaped like a status
//! line (`550 BC: ...`). Only `.` or a `250 ok` completion closes it.

use std::io::{BufRead, Write};

use super::{Command, ReplyLine, Status};
use crate::error::{DictError, Result};

/// Line terminator for outgoing commands
pub(crate) const LINE_ENDING: &str = "\r\n";

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command as a single line, without the terminator
pub fn encode_command(command: &Command) -> Result<String> {
    let mut line = String::from(command.command_type().keyword());
    for arg in command.args() {
        line.push(' ');
        line.push_str(&quote_arg(arg)?);
    }
    Ok(line)
}

/// Quote an argument if it is not a plain atom
fn quote_arg(arg: &str) -> Result<String> {
    if arg.contains(['\r', '\n']) {
        return Err(DictError::InvalidArgument(format!(
            "line break in argument {:?}",
            arg
        )));
    }

    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'));
    if !needs_quotes {
        return Ok(arg.to_string());
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Ok(quoted)
}

/// Write a command line to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    let line = encode_command(command)?;
    tracing::trace!("-> {}", line);

    writer.write_all(line.as_bytes())?;
    writer.write_all(LINE_ENDING.as_bytes())?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Read one raw line, without its CRLF/LF terminator
///
/// End of stream is reported as [`DictError::UnexpectedEof`].
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(DictError::UnexpectedEof);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    let line = String::from_utf8_lossy(&buf).into_owned();
    tracing::trace!("<- {}", line);
    Ok(line)
}

/// Read one line and classify it
pub fn read_reply_line<R: BufRead>(reader: &mut R) -> Result<ReplyLine> {
    read_line(reader).map(ReplyLine::classify)
}

/// Read one line of an open text section and classify it
pub fn read_section_line<R: BufRead>(reader: &mut R) -> Result<ReplyLine> {
    read_line(reader).map(ReplyLine::classify_in_section)
}

/// Consume lines until a terminal status line, returning it
pub fn finish_reply<R: BufRead>(reader: &mut R) -> Result<Status> {
    loop {
        if let ReplyLine::Status(status) = read_reply_line(reader)? {
            if status.is_terminal() {
                return Ok(status);
            }
        }
    }
}

/// Lazy sequence of classified reply lines
///
/// Yields every line up to and including the first terminal status line,
/// then ends. A read error is yielded once and also ends the sequence.
///
/// A status line that opens a text section switches classification to
/// [`ReplyLine::classify_in_section`] until the section's `.`.
pub struct ReplyLines<'a, R> {
    reader: &'a mut R,
    in_section: bool,
    done: bool,
}

impl<'a, R: BufRead> ReplyLines<'a, R> {
    pub fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            in_section: false,
            done: false,
        }
    }

    /// Continue a reply whose section-opening status was already read
    pub fn within_section(reader: &'a mut R) -> Self {
        Self {
            reader,
            in_section: true,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ReplyLines<'_, R> {
    type Item = Result<ReplyLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let line = if self.in_section {
            read_section_line(self.reader)
        } else {
            read_reply_line(self.reader)
        };
        match &line {
            Ok(ReplyLine::Status(status)) if status.is_terminal() => self.done = true,
            Ok(ReplyLine::Status(status)) => self.in_section = status.kind().opens_section(),
            Ok(ReplyLine::End) => self.in_section = false,
            Ok(ReplyLine::Text(_)) => {}
            Err(_) => self.done = true,
        }
        Some(line)
    }
}

// =============================================================================
// Field Helpers
// =============================================================================

/// Split status text into fields, honouring single/double quotes and
/// backslash escapes.
///
/// `hello wn "WordNet (r) 3.0"` gives `["hello", "wn", "WordNet (r) 3.0"]`.
pub fn split_fields(text: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = text.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(&first) = chars.peek() else {
            return fields;
        };

        let mut field = String::new();
        if first == '"' || first == '\'' {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => field.extend(chars.next()),
                    c if c == first => break,
                    c => field.push(c),
                }
            }
        } else {
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                field.push(c);
            }
        }
        fields.push(field);
    }
}

/// Split `prefix "quoted" ...` at its first double-quoted field
///
/// Returns the text before the first quote and the text up to the next
/// quote (or the end of the line when unterminated).
pub fn quoted_field(line: &str) -> Option<(&str, &str)> {
    let open = line.find('"')?;
    let rest = &line[open + 1..];
    let field = match rest.find('"') {
        Some(close) => &rest[..close],
        None => rest,
    };
    Some((&line[..open], field))
}
