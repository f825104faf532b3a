//! Opening and closing markup for every output context
//!
//! Names without an entry (layout no-ops such as `mbox` or `textsf`)
//! render as nothing: their content is kept, their markup is dropped.

use crate::common::symbols::{MONOSPACE_START, SPAN_END};
use phf::phf_map;

const HEADER_END: &str = "</text:h>";
const LIST_END: &str = "</text:list>";
const PARAGRAPH_END: &str = "</text:p>";

static ENTRY_TEXT: phf::Map<&'static str, &'static str> = phf_map! {
    "textbf" => "<text:span text:style-name=\"Bold\">",
    "CodeLine" => "<text:p text:style-name=\"CodeLine\">",
    "enumerate" => "<text:list text:style-name=\"Enumerate\">",
    "textit" => "<text:span text:style-name=\"Italic\">",
    "item" => "<text:list-item>",
    "itemize" => "<text:list>",
    "paragraph" => "<text:p text:style-name=\"Paragraph\">",
    "section" => "<text:h text:style-name=\"Section\" text:outline-level=\"2\">",
    "subsection" => "<text:h text:style-name=\"Subsection\" text:outline-level=\"2\">",
    "superscript" => "<text:span text:style-name=\"Superscript\">",
    "title" => "<text:h text:style-name=\"Header_Logo\" text:outline-level=\"1\">",
    "texttt" => MONOSPACE_START,

    "hlcom" => "<text:span text:style-name=\"HighlightComment\">",
    "hlslc" => "<text:span text:style-name=\"HighlightComment\">",
    "hlesc" => "<text:span text:style-name=\"HighlightEscape\">",
    "hlkwa" => "<text:span text:style-name=\"HighlightKeywordA\">",
    "hlkwb" => "<text:span text:style-name=\"HighlightKeywordB\">",
    "hlkwc" => "<text:span text:style-name=\"HighlightKeywordC\">",
    "hlpps" => "<text:span text:style-name=\"HighlightPreprocessor\">",
    "hllin" => "<text:span text:style-name=\"HighlightLineNumbering\">",
    "hlnum" => "<text:span text:style-name=\"HighlightNumberConstant\">",
    "hlopt" => "<text:span text:style-name=\"HighlightOperator\">",
    "hlppc" => "<text:span text:style-name=\"HighlightPreprocessor\">",
    "hlstd" => "<text:span text:style-name=\"HighlightStandard\">",
    "hlstr" => "<text:span text:style-name=\"HighlightString\">",
    "hlipl" => "<text:span text:style-name=\"HighlightStringSubstitution\">",
    "hlkwd" => "<text:span text:style-name=\"HighlightType\">",
};

static EXIT_TEXT: phf::Map<&'static str, &'static str> = phf_map! {
    "textbf" => SPAN_END,
    "CodeLine" => PARAGRAPH_END,
    "textit" => SPAN_END,
    "enumerate" => LIST_END,
    "item" => "</text:list-item>",
    "itemize" => LIST_END,
    "paragraph" => PARAGRAPH_END,
    "section" => HEADER_END,
    "subsection" => HEADER_END,
    "superscript" => SPAN_END,
    "title" => HEADER_END,
    "texttt" => SPAN_END,

    "hlcom" => SPAN_END,
    "hlslc" => SPAN_END,
    "hlesc" => SPAN_END,
    "hlkwa" => SPAN_END,
    "hlkwb" => SPAN_END,
    "hlkwc" => SPAN_END,
    "hlpps" => SPAN_END,
    "hllin" => SPAN_END,
    "hlnum" => SPAN_END,
    "hlopt" => SPAN_END,
    "hlppc" => SPAN_END,
    "hlstd" => SPAN_END,
    "hlstr" => SPAN_END,
    "hlipl" => SPAN_END,
    "hlkwd" => SPAN_END,
};

pub fn entry_text(name: &str) -> &'static str {
    ENTRY_TEXT.get(name).copied().unwrap_or("")
}

pub fn exit_text(name: &str) -> &'static str {
    EXIT_TEXT.get(name).copied().unwrap_or("")
}

/// Wrap already-escaped text in the markup for `name`.
pub fn wrap(name: &str, text: &str) -> String {
    format!("{}{text}{}", entry_text(name), exit_text(name))
}
