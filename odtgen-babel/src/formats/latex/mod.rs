//! LaTeX-like macro dialect
//!
//!     Input is a restricted macro language: `\title{..}` names the document,
//!     the body lives between `\begin{document}` and `\end{document}`, and
//!     everything in between is built from the closed vocabulary in
//!     [`crate::ast::vocabulary`]. Anything outside that vocabulary is an
//!     error, except the operator glyph macros of the symbol table.
//!
//!     `\sourcecodefile{name}` pulls in pre-highlighted code through a
//!     [`SourceLoader`]; the included text is parsed in code mode, where
//!     spaces are dropped and newlines do not become spaces.

pub mod cursor;
pub mod parser;

use crate::ast::Document;
use crate::error::FormatError;
use crate::external::{FsSourceLoader, SourceLoader};
use crate::format::Format;

pub use parser::LatexParser;

/// Format implementation for the macro dialect
pub struct LatexFormat {
    loader: Box<dyn SourceLoader>,
}

impl LatexFormat {
    pub fn new(loader: impl SourceLoader + 'static) -> Self {
        LatexFormat {
            loader: Box::new(loader),
        }
    }
}

impl Default for LatexFormat {
    fn default() -> Self {
        LatexFormat::new(FsSourceLoader::default())
    }
}

impl Format for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX-like macro dialect"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex", "latex"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let mut parser = LatexParser::new(source, self.loader.as_ref());
        let doc = parser.parse_document()?;
        if doc.root.is_none() {
            log::warn!("no document body found; output will be empty");
        }
        Ok(doc)
    }
}
