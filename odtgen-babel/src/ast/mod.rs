//! Document tree shared by every parser and serializer
//!
//!     A parser builds a [`Document`]: a title tree and a body tree, each
//!     owning its nodes outright. Nodes are only ever appended to while
//!     parsing and are read-only afterwards; serializers walk them top-down
//!     and never need a parent pointer.
//!
//!     Non-text nodes are named after a macro or keyword of the vocabulary
//!     in [`vocabulary`]. Building one with a name outside that vocabulary
//!     fails with [`ParseError::UnknownName`].

pub mod vocabulary;

use crate::error::ParseError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Block region delimited by begin/end markers
    Environment,
    /// Macro with one brace-delimited argument
    Fragment,
    /// Macro without arguments
    Tag,
    /// Literal text run
    Text,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Environment => "Environment",
            NodeType::Fragment => "Fragment",
            NodeType::Tag => "Tag",
            NodeType::Text => "Text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub node_type: NodeType,
    /// Macro name, or the literal content of a text node
    pub value: String,
    /// Set on text runs that close the current paragraph
    pub end_paragraph: bool,
    pub children: Vec<Node>,
}

impl Node {
    /// Build a node for a vocabulary name, typed by its classification.
    pub fn named(name: &str) -> Result<Self, ParseError> {
        let node_type = vocabulary::classify(name)?;
        Ok(Node {
            node_type,
            value: name.to_string(),
            end_paragraph: false,
            children: Vec::new(),
        })
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node {
            node_type: NodeType::Text,
            value: value.into(),
            end_paragraph: false,
            children: Vec::new(),
        }
    }

    pub fn with_end_paragraph(mut self, end_paragraph: bool) -> Self {
        self.end_paragraph = end_paragraph;
        self
    }

    /// Append a child and hand back a reference to it.
    pub fn push(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append a classified child named `name`.
    pub fn push_named(&mut self, name: &str) -> Result<&mut Node, ParseError> {
        let child = Node::named(name)?;
        Ok(self.push(child))
    }

    pub fn push_text(&mut self, value: impl Into<String>) -> &mut Node {
        self.push(Node::text(value))
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }
}

/// Single-line description used by the debug dump.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type = {}, value = _{}_, endParagraph = {}",
            self.node_type, self.value, self.end_paragraph
        )
    }
}

/// A parsed document.
///
/// Either part may be missing: the macro dialect tolerates an absent
/// `\title{..}` and reports an absent document body as a soft failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: Option<Node>,
    pub root: Option<Node>,
}

impl Document {
    pub fn new(title: Option<Node>, root: Option<Node>) -> Self {
        Document { title, root }
    }
}
