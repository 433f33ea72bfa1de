//! Protocol Module
//!
//! Defines the DICT (RFC 2229) wire protocol as seen from a client.
//!
//! ## Protocol Format
//!
//! ### Request Format
//! ```text
//! DEFINE <database> <word>\r\n
//! ```
//!
//! ### Commands
//! - DEFINE db word
//! - MATCH db strategy word
//! - SHOW DATABASES
//! - SHOW STRATEGIES
//! - SHOW INFO db
//! - QUIT
//!
//! ### Reply Format
//! A reply is a sequence of lines. A line starting with a three-digit code
//! and a space is a status line, a line holding only `.` ends a text
//! section, anything else is text. The reply ends with a status line whose
//! code is 200 or above.
//!
//! ### Status Codes
//! - 1xx: preliminary, text follows
//! - 2xx: completion
//! - 4xx/5xx: refusal (552/554/555 mean "nothing found")

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{ReplyLine, Status, StatusCode};
pub use codec::{
    encode_command, finish_reply, quoted_field, read_line, read_reply_line, read_section_line,
    split_fields, write_command, ReplyLines,
};
