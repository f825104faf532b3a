//! The closed vocabulary of macro and keyword names
//!
//! Every non-text node carries one of these names. The three sets are
//! disjoint and [`classify`] resolves a name against them in a fixed
//! order: environments, then fragments, then tags.

use super::NodeType;
use crate::error::ParseError;
use phf::phf_set;

pub mod names {
    pub const BACKSLASH: &str = "backslash";
    pub const BEGIN: &str = "begin";
    pub const BOLD_FACE: &str = "textbf";
    pub const CENTER: &str = "center";
    pub const CODE_END: &str = "CodeEnd";
    pub const CODE_LINE: &str = "CodeLine";
    pub const CODE_START: &str = "CodeStart";
    pub const CODE_TILDE: &str = "sim";
    pub const DOCUMENT: &str = "document";
    pub const END: &str = "end";
    pub const ENUMERATE: &str = "enumerate";
    pub const HSPACE: &str = "hspace";
    pub const INPUT: &str = "input";
    pub const ITALIC: &str = "textit";
    pub const ITEM: &str = "item";
    pub const ITEMIZE: &str = "itemize";
    pub const LDOTS: &str = "ldots";
    pub const MAKE_TITLE: &str = "maketitle";
    pub const MBOX: &str = "mbox";
    pub const PARAGRAPH: &str = "paragraph";
    pub const QUOTE: &str = "dq";
    pub const SECTION: &str = "section";
    pub const SOURCE_CODE: &str = "sourcecodefile";
    pub const SUBSECTION: &str = "subsection";
    pub const SUPERSCRIPT: &str = "superscript";
    pub const TEXT_BACKSLASH: &str = "textbackslash";
    pub const TEXTBAR: &str = "textbar";
    pub const TEXT_TT: &str = "texttt";
    pub const TILDE: &str = "textasciitilde";
    pub const TITLE: &str = "title";
    pub const UNDERSCORE: &str = "textunderscore";
    pub const VERBATIM: &str = "verbatim";
}

/// Span names produced by the syntax highlighter
pub mod highlight {
    pub const COMMENT_BLOCK: &str = "hlcom";
    pub const COMMENT_LINE: &str = "hlslc";
    pub const ESCAPE: &str = "hlesc";
    pub const INCLUDE_QUOTE: &str = "hlpps";
    pub const KEYWORD_A: &str = "hlkwa";
    pub const KEYWORD_B: &str = "hlkwb";
    pub const KEYWORD_C: &str = "hlkwc";
    pub const LINE_NUMBERING: &str = "hllin";
    pub const NUMBER_CONSTANT: &str = "hlnum";
    pub const OPERATOR: &str = "hlopt";
    pub const PREPROCESSOR: &str = "hlppc";
    pub const STANDARD: &str = "hlstd";
    pub const STRING: &str = "hlstr";
    pub const STRING_SUBSTITUTION: &str = "hlipl";
    pub const TYPE: &str = "hlkwd";
}

/// Operator glyph tags rendered by the serializer
pub mod cpp {
    pub const CPP: &str = "cpp";
    pub const DECREMENT: &str = "cppDec";
    pub const INCREMENT: &str = "cppInc";
}

/// Unicode markers inserted while normalising text
pub mod unicode {
    pub const NO_SPACE_DONT_BREAK: &str = "\u{2060}";
    pub const NON_BREAKING_SPACE: &str = "\u{00a0}";
}

pub static ENVIRONMENTS: phf::Set<&'static str> = phf_set! {
    "document",
    "enumerate",
    "itemize",
    "verbatim",
    "center",
    "CodeLine",
    "paragraph",
};

pub static FRAGMENTS: phf::Set<&'static str> = phf_set! {
    "textbf",
    "hspace",
    "input",
    "textit",
    "section",
    "sourcecodefile",
    "subsection",
    "texttt",
    "title",
    "hspace*",
    "mbox",
    "textsf",
    "superscript",
    "hlcom",
    "hlslc",
    "hlesc",
    "hlkwa",
    "hlkwb",
    "hlkwc",
    "hlpps",
    "hllin",
    "hlnum",
    "hlopt",
    "hlppc",
    "hlstd",
    "hlstr",
    "hlipl",
    "hlkwd",
};

pub static TAGS: phf::Set<&'static str> = phf_set! {
    "backslash",
    "sim",
    "item",
    "ldots",
    "maketitle",
    "normalfont",
    "dq",
    "textbar",
    "textbackslash",
    "textasciitilde",
    "ttfamily",
    "textunderscore",
    "fill",
    "indent",
    "noindent",
    "normalsize",
    "CodeStart",
    "CodeEnd",
    "cpp",
    "cppDec",
    "cppInc",
};

pub fn is_environment(name: &str) -> bool {
    ENVIRONMENTS.contains(name)
}

pub fn is_fragment(name: &str) -> bool {
    FRAGMENTS.contains(name)
}

pub fn is_tag(name: &str) -> bool {
    TAGS.contains(name)
}

/// Resolve a name to the node type it must be built as.
pub fn classify(name: &str) -> Result<NodeType, ParseError> {
    if is_environment(name) {
        Ok(NodeType::Environment)
    } else if is_fragment(name) {
        Ok(NodeType::Fragment)
    } else if is_tag(name) {
        Ok(NodeType::Tag)
    } else {
        Err(ParseError::UnknownName(name.to_string()))
    }
}

/// The text that opens `name` in the macro dialect (`\begin{x}`, `\x{`, `\x`).
pub fn begin_marker(name: &str) -> Result<String, ParseError> {
    match classify(name)? {
        NodeType::Environment => Ok(format!("\\{}{{{name}}}", names::BEGIN)),
        NodeType::Fragment => Ok(format!("\\{name}{{")),
        _ => Ok(format!("\\{name}")),
    }
}

/// The text that closes `name`; tags have no end marker.
pub fn end_marker(name: &str) -> Result<String, ParseError> {
    match classify(name)? {
        NodeType::Environment => Ok(format!("{}{{{name}}}", names::END)),
        NodeType::Fragment => Ok("}".to_string()),
        _ => Ok(String::new()),
    }
}
