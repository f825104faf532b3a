//! Stack of open output contexts
//!
//! Block contexts (paragraphs, code lines, headings, the title) buffer their
//! inline content and only emit markup when they close, so a block that
//! never receives content leaves no trace. Every other context emits its
//! opening markup on push and its closing markup on pop.

use super::markup::{entry_text, exit_text};
use crate::ast::vocabulary::names;

const FOUR_SPACES: &str = "<text:s text:c=\"4\"/>";

pub fn is_block(name: &str) -> bool {
    matches!(
        name,
        names::CODE_LINE | names::PARAGRAPH | names::SECTION | names::SUBSECTION | names::TITLE
    )
}

pub fn is_list(name: &str) -> bool {
    matches!(name, names::ENUMERATE | names::ITEMIZE)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    inside: Vec<String>,
    /// Stack height at which each open list was pushed
    list_levels: Vec<usize>,
    paragraph: String,
    in_code: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.inside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }

    pub fn in_code(&self) -> bool {
        self.in_code
    }

    /// Stack height of the innermost open list.
    pub fn list_level(&self) -> Option<usize> {
        self.list_levels.last().copied()
    }

    pub fn in_paragraph(&self) -> bool {
        self.inside.last().is_some_and(|name| is_block(name))
    }

    /// Append to the paragraph buffer. Whitespace-only runs in code mode
    /// become an explicit space count.
    pub fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.in_code && text.chars().all(char::is_whitespace) {
            self.paragraph
                .push_str(&format!("<text:s text:c=\"{}\"/>", text.chars().count()));
        } else {
            self.paragraph.push_str(text);
        }
    }

    /// Open `name`, returning the markup to emit now.
    pub fn push(&mut self, name: &str) -> &'static str {
        if is_list(name) {
            self.list_levels.push(self.inside.len());
        }

        let name = if self.in_code && name == names::PARAGRAPH {
            names::CODE_LINE
        } else {
            name
        };
        self.inside.push(name.to_string());

        if is_block(name) {
            ""
        } else {
            entry_text(name)
        }
    }

    /// Close the innermost context, returning the markup to emit.
    pub fn pop(&mut self) -> String {
        let Some(name) = self.inside.pop() else {
            return String::new();
        };

        let mut result = String::new();
        if is_block(&name) {
            if !self.paragraph.is_empty() || self.in_code {
                let body = std::mem::take(&mut self.paragraph);
                let body = if self.in_code {
                    body.replace("    ", FOUR_SPACES)
                } else {
                    body
                };
                result = format!("{}{body}{}", entry_text(&name), exit_text(&name));
            }
        } else {
            result.push_str(exit_text(&name));
        }

        if is_list(&name) {
            self.list_levels.pop();
        }
        result
    }

    /// Close contexts until only `level` remain open.
    pub fn pop_to(&mut self, level: usize) -> String {
        let mut result = String::new();
        while self.inside.len() > level {
            result.push_str(&self.pop());
        }
        result
    }

    /// Close every open context.
    pub fn drain(&mut self) -> String {
        self.pop_to(0)
    }

    pub fn start_code_frame(&mut self) -> String {
        let result = if self.in_paragraph() {
            self.pop()
        } else {
            String::new()
        };
        self.in_code = true;
        result
    }

    /// Leave code mode; a pending code line holding only whitespace is dropped.
    pub fn end_code_frame(&mut self) -> String {
        let mut result = String::new();
        if self.in_paragraph() {
            let blank = self.paragraph.trim().is_empty();
            let popped = self.pop();
            if !blank {
                result = popped;
            }
        }
        self.in_code = false;
        result
    }
}
