//! Document conversion from macro and Markdown dialects to OpenDocument text
//!
//!     This crate parses two small source dialects into one document tree and
//!     serializes that tree as OpenDocument text body markup.
//!
//!     - The LaTeX-like macro dialect: a closed vocabulary of environments,
//!       one-argument fragments and zero-argument tags (see ./ast/vocabulary.rs).
//!     - The Markdown dialect: title line, headings, bullet lists, fenced code.
//!
//!     Both parsers build the same [`ast::Document`], so the serializer never
//!     needs to know which dialect it came from.
//!
//!     This is a pure lib: it powers odtgen-cli but never prints, reads
//!     environment variables or exits. External resources (included source
//!     files, the syntax highlighter) come in through the traits in
//!     ./external.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── ast                     # Document tree and vocabulary
//!     ├── common                  # Entity escaping, operator glyphs
//!     ├── external                # Source loading and highlighting collaborators
//!     ├── formats
//!     │   ├── latex               # cursor.rs + recursive-descent parser.rs
//!     │   ├── markdown            # line-oriented parser.rs
//!     │   ├── odt                 # context stack, markup tables, serializer
//!     │   └── treeviz             # debug dump
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs
//!     includes them as modules.

pub mod ast;
pub mod common;
pub mod error;
pub mod external;
pub mod format;
pub mod formats;
pub mod registry;

pub use ast::{Document, Node, NodeType};
pub use error::{FormatError, ParseError};
pub use format::Format;
pub use registry::FormatRegistry;

/// Parse `source` with the `from` format and serialize the result with `to`.
pub fn convert(
    registry: &FormatRegistry,
    source: &str,
    from: &str,
    to: &str,
) -> Result<String, FormatError> {
    let doc = registry.parse(source, from)?;
    registry.serialize(&doc, to)
}
