//! Markdown dialect
//!
//! A small, line-oriented subset: the first line is the title, `#` headings
//! (1–2 hashes for sections, 3–4 for subsections), `-` bullet lists, fenced
//! code blocks and plain paragraphs. Inline: `*bold*`, `` `code` `` and
//! `[text](url)`, which renders only the url in monospace.
//!
//! # Code blocks
//!
//! A fence without a language renders each line as a monospace code line.
//! With a language, the lines go through a [`Highlighter`] and its output is
//! parsed by the macro-dialect parser in code mode. Without a highlighter
//! such blocks fall back to plain code lines.

pub mod parser;

use crate::ast::Document;
use crate::error::FormatError;
use crate::external::Highlighter;
use crate::format::Format;

pub use parser::MarkdownParser;

/// Format implementation for the Markdown dialect
#[derive(Default)]
pub struct MarkdownFormat {
    highlighter: Option<Box<dyn Highlighter>>,
}

impl MarkdownFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highlighter(highlighter: impl Highlighter + 'static) -> Self {
        MarkdownFormat {
            highlighter: Some(Box::new(highlighter)),
        }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown dialect (title line, headings, lists, fenced code)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let mut parser = MarkdownParser::new(self.highlighter.as_deref());
        Ok(parser.parse_document(source)?)
    }
}
