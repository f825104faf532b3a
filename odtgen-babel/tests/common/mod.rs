//! Shared helpers for the integration tests

use odtgen_babel::external::{Highlighter, MemorySourceLoader};
use odtgen_babel::format::Format;
use odtgen_babel::formats::{LatexFormat, MarkdownFormat, OdtFormat};
use odtgen_babel::FormatError;

const TEXT_NAMESPACE: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";

pub fn latex_to_odt_with(loader: MemorySourceLoader, source: &str) -> Result<String, FormatError> {
    let doc = LatexFormat::new(loader).parse(source)?;
    OdtFormat.serialize(&doc)
}

pub fn latex_to_odt(source: &str) -> String {
    latex_to_odt_with(MemorySourceLoader::new(), source).expect("conversion should succeed")
}

pub fn markdown_to_odt(source: &str) -> String {
    let doc = MarkdownFormat::new()
        .parse(source)
        .expect("markdown should parse");
    OdtFormat.serialize(&doc).expect("serialization should succeed")
}

pub fn highlighted_markdown_to_odt(highlighter: impl Highlighter + 'static, source: &str) -> String {
    let doc = MarkdownFormat::with_highlighter(highlighter)
        .parse(source)
        .expect("markdown should parse");
    OdtFormat.serialize(&doc).expect("serialization should succeed")
}

/// Parse the fragment inside a root element that declares the text namespace.
pub fn assert_well_formed(markup: &str) {
    let wrapped = format!("<office xmlns:text=\"{TEXT_NAMESPACE}\">{markup}</office>");
    if let Err(e) = roxmltree::Document::parse(&wrapped) {
        panic!("output is not well-formed ({e}):\n{markup}");
    }
}
