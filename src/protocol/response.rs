//! Reply line definitions
//!
//! Every line the server sends is classified once into a [`ReplyLine`];
//! status lines are decoded into a [`Status`] carrying a typed [`StatusCode`].

use std::fmt;

/// Status codes this client gives meaning to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    DatabasesPresent,
    StrategiesAvailable,
    InformationFollows,
    DefinitionsRetrieved,
    DefinitionFollows,
    MatchesFound,
    Banner,
    Closing,
    Ok,
    NotImplemented,
    InvalidDatabase,
    InvalidStrategy,
    NoMatch,
    NoDatabases,
    NoStrategies,
    Other(u16),
}

impl StatusCode {
    pub fn from_code(code: u16) -> Self {
        match code {
            110 => StatusCode::DatabasesPresent,
            111 => StatusCode::StrategiesAvailable,
            112 => StatusCode::InformationFollows,
            150 => StatusCode::DefinitionsRetrieved,
            151 => StatusCode::DefinitionFollows,
            152 => StatusCode::MatchesFound,
            220 => StatusCode::Banner,
            221 => StatusCode::Closing,
            250 => StatusCode::Ok,
            502 => StatusCode::NotImplemented,
            550 => StatusCode::InvalidDatabase,
            551 => StatusCode::InvalidStrategy,
            552 => StatusCode::NoMatch,
            554 => StatusCode::NoDatabases,
            555 => StatusCode::NoStrategies,
            other => StatusCode::Other(other),
        }
    }

    /// Preliminary replies followed by a `.`-terminated text section
    pub fn opens_section(&self) -> bool {
        matches!(
            self,
            StatusCode::DatabasesPresent
                | StatusCode::StrategiesAvailable
                | StatusCode::InformationFollows
                | StatusCode::DefinitionFollows
                | StatusCode::MatchesFound
        )
    }

    /// Negative replies that mean "nothing found" rather than failure
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            StatusCode::NoMatch | StatusCode::NoDatabases | StatusCode::NoStrategies
        )
    }
}

/// A decoded status line: `NNN text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: u16,
    kind: StatusCode,
    text: String,
}

impl Status {
    /// Decode a status line.
    ///
    /// Returns `None` unless the line starts with three ASCII digits
    /// followed by a space or the end of the line.
    pub fn parse(line: &str) -> Option<Self> {
        let bytes = line.as_bytes();
        if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
            return None;
        }
        if !matches!(bytes.get(3), None | Some(b' ')) {
            return None;
        }

        let code: u16 = line[..3].parse().ok()?;
        Some(Self {
            code,
            kind: StatusCode::from_code(code),
            text: line.get(4..).unwrap_or("").to_string(),
        })
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn kind(&self) -> StatusCode {
        self.kind
    }

    /// Text following the code
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Completion or negative reply: nothing more belongs to this command
    pub fn is_terminal(&self) -> bool {
        self.code >= 200
    }

    /// A bare `250` or `250 ok ...` completion line
    ///
    /// Inside a text section this is the only status line that ends the
    /// reply without a preceding `.`; a body line such as
    /// `250 grams make a quarter kilo` does not qualify.
    pub fn is_ok_completion(&self) -> bool {
        let text = self.text.as_bytes();
        self.kind == StatusCode::Ok
            && (text.is_empty() || (text.len() >= 2 && text[..2].eq_ignore_ascii_case(b"ok")))
    }

    /// Transient or permanent negative reply (4xx/5xx)
    pub fn is_error(&self) -> bool {
        self.code >= 400
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.text)
        }
    }
}

/// One classified line of a server reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyLine {
    /// A status line starting a new reply unit or ending the reply
    Status(Status),

    /// A payload line (dot-unstuffed)
    Text(String),

    /// The `.` line closing a text section
    End,
}

impl ReplyLine {
    pub fn classify(line: String) -> Self {
        if line == "." {
            return ReplyLine::End;
        }
        if let Some(status) = Status::parse(&line) {
            return ReplyLine::Status(status);
        }
        Self::text(line)
    }

    /// Classify a line read while a text section is open
    ///
    /// Status-shaped lines are text here, except an `ok` completion.
    pub fn classify_in_section(line: String) -> Self {
        if line == "." {
            return ReplyLine::End;
        }
        match Status::parse(&line) {
            Some(status) if status.is_ok_completion() => ReplyLine::Status(status),
            _ => Self::text(line),
        }
    }

    fn text(line: String) -> Self {
        match line.strip_prefix("..") {
            Some(rest) => ReplyLine::Text(format!(".{}", rest)),
            None => ReplyLine::Text(line),
        }
    }
}
