//! Definition of a word

/// One definition returned by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    word: String,
    database: String,
    body: String,
    lines: usize,
}

impl Definition {
    /// Create a definition with an empty body
    pub fn new(word: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            database: database.into(),
            body: String::new(),
            lines: 0,
        }
    }

    /// Replace the body with a single first line
    pub fn set_body(&mut self, line: &str) {
        self.body = line.to_string();
        self.lines = 1;
    }

    /// Append a body line, separated from the previous one by `\n`
    pub fn append_line(&mut self, line: &str) {
        if self.lines > 0 {
            self.body.push('\n');
        }
        self.body.push_str(line);
        self.lines += 1;
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Name of the database that supplied this definition
    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
