//! Debug dump of the document tree
//!
//! One line per node, indented with one tab per level of nesting:
//!
//! ```text
//! type = Environment, value = _document_, endParagraph = false
//!     type = Fragment, value = _section_, endParagraph = false
//!         type = Text, value = _Intro_, endParagraph = false
//! ```
//!
//! The title tree is dumped first, then the body. This is a diagnostic aid,
//! not part of the output contract.

use crate::ast::{Document, Node};
use crate::error::FormatError;
use crate::format::Format;
use std::fmt::Write;

fn dump_into(output: &mut String, node: &Node, depth: usize) {
    for _ in 0..depth {
        output.push('\t');
    }
    // writing to a String cannot fail
    let _ = writeln!(output, "{node}");
    for child in &node.children {
        dump_into(output, child, depth + 1);
    }
}

/// Dump a node and its subtree.
pub fn dump_node(node: &Node) -> String {
    let mut output = String::new();
    dump_into(&mut output, node, 0);
    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    doc.title
        .iter()
        .chain(doc.root.iter())
        .map(dump_node)
        .collect()
}

#[derive(Default)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Indented dump of the document tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
