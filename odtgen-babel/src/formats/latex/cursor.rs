//! Character cursor and token scanner for the macro dialect

use crate::error::ParseError;

/// Characters that end a macro name; on their own they form a one-character token.
pub const SPECIAL_CHARS: [char; 10] = ['\'', '{', '}', '\\', '#', '$', '%', '_', '&', '^'];

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

fn ends_token(c: char) -> bool {
    c.is_whitespace() || is_special(c)
}

/// Scanner state for one input text.
///
/// Included sources get a fresh cursor; the including cursor is parked
/// and restored once the included text is consumed.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    data: Vec<char>,
    idx: usize,
    /// Unmatched `{` seen as plain characters
    pub brace_count: usize,
    /// Whitespace is significant (verbatim and highlighted code)
    pub in_code: bool,
    pub in_math: bool,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Cursor {
            data: text.chars().collect(),
            ..Cursor::default()
        }
    }

    pub fn position(&self) -> usize {
        self.idx
    }

    pub fn eof(&self) -> bool {
        self.idx >= self.data.len()
    }

    pub fn current(&self) -> Option<char> {
        self.data.get(self.idx).copied()
    }

    pub fn previous(&self) -> Option<char> {
        self.idx.checked_sub(1).and_then(|i| self.data.get(i).copied())
    }

    pub fn advance(&mut self) {
        self.idx += 1;
    }

    pub fn retreat(&mut self) {
        self.idx = self.idx.saturating_sub(1);
    }

    /// The current character, or an end-of-input error naming what was expected.
    pub fn expect_current(&self, expected: &str) -> Result<char, ParseError> {
        self.current().ok_or_else(|| ParseError::UnexpectedEof {
            offset: self.idx,
            expected: expected.to_string(),
        })
    }

    /// Move to the next occurrence of `c`; false if the input runs out first.
    pub fn advance_until(&mut self, c: char) -> bool {
        while let Some(current) = self.current() {
            if current == c {
                return true;
            }
            self.advance();
        }
        false
    }

    /// Move the cursor to the first occurrence of `pattern` at or after it.
    pub fn seek(&mut self, pattern: &str) -> bool {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return true;
        }
        let found = self.data[self.idx.min(self.data.len())..]
            .windows(pattern.len())
            .position(|window| window == pattern.as_slice());
        match found {
            Some(offset) => {
                self.idx += offset;
                true
            }
            None => false,
        }
    }

    pub fn skip(&mut self, count: usize) {
        self.idx += count;
    }

    /// Scan the name that follows a backslash.
    ///
    /// A special or whitespace character is a token of its own. Otherwise the
    /// token runs up to the next special or whitespace character, and a `{` or
    /// `}` directly after it is swallowed as a delimiter.
    pub fn next_token(&mut self) -> Result<String, ParseError> {
        let first = self.expect_current("a token")?;
        if ends_token(first) {
            self.advance();
            return Ok(first.to_string());
        }

        let mut token = String::new();
        while let Some(c) = self.current() {
            if ends_token(c) {
                break;
            }
            token.push(c);
            self.advance();
        }

        match self.current() {
            None => log::info!("EOF reached while scanning token '{token}'"),
            Some('{') | Some('}') => self.advance(),
            Some(_) => {}
        }

        Ok(token)
    }
}
