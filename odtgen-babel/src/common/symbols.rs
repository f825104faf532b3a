//! Operator macros of the macro dialect
//!
//! Macros such as `\cppScope` are not part of the vocabulary. They stand
//! for two glyphs set in monospace and joined so they never break apart,
//! and the parser emits them as ready-made span markup.

use crate::ast::vocabulary::unicode::NO_SPACE_DONT_BREAK;
use phf::phf_map;

pub const MONOSPACE_START: &str = "<text:span text:style-name=\"Monospace\">";
pub const SPAN_END: &str = "</text:span>";

/// Two-glyph operators, already entity-escaped.
static OPERATOR_GLYPHS: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "cppAddAssign" => ("+", "="),
    "cppAnd" => ("&amp;", "&amp;"),
    "cppEqual" => ("=", "="),
    "cppGreaterEqual" => ("&gt;", "="),
    "cppLessEqual" => ("&lt;", "="),
    "cppNotEqual" => ("!", "="),
    "cppOr" => ("|", "|"),
    "cppPtrAccess" => ("-", "&gt;"),
    "cppLeftShift" => ("&lt;", "&lt;"),
    "cppRightShift" => ("&gt;", "&gt;"),
    "cppScope" => (":", ":"),
};

/// Markup for an operator macro, or `None` if `token` is not one.
pub fn symbol_markup(token: &str) -> Option<String> {
    let (first, second) = OPERATOR_GLYPHS.get(token)?;
    Some(format!(
        "{MONOSPACE_START}{first}{NO_SPACE_DONT_BREAK}{second}{SPAN_END}"
    ))
}
