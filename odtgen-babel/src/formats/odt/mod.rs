//! OpenDocument text markup output
//!
//!     Produces the body of an OpenDocument text file: `text:p`, `text:h`,
//!     `text:list` and `text:span` elements with fixed style names (`Bold`,
//!     `Paragraph`, `Section`, `CodeLine`, `Highlight*`, ...). No document
//!     envelope is written; wrapping the fragment into a full `.fodt` with
//!     namespace declarations and style definitions is left to the caller.
//!
//!     Serialization never fails on structure it does not understand:
//!     unknown tags are skipped and every context still open after the walk
//!     is closed, so the output nests correctly. The one exception is an
//!     `item` outside any list, which has no sensible rendering.

pub mod context;
pub mod markup;
pub mod serializer;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;

pub use serializer::serialize_document;

/// Format implementation for the output markup
#[derive(Default)]
pub struct OdtFormat;

impl Format for OdtFormat {
    fn name(&self) -> &str {
        "odt"
    }

    fn description(&self) -> &str {
        "OpenDocument text body markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["fodt", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_document(doc)
    }
}
