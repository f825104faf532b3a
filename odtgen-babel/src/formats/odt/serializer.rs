//! Tree walk that turns a [`Document`] into output markup
//!
//! The walk is top-down and keeps a [`Context`] stack of what is open.
//! Blocks close any open paragraph before they start and close everything
//! opened inside them when they end. Inline content opens a generic
//! paragraph when none is open. Text runs accumulate in the paragraph
//! buffer until a paragraph break or an enclosing block closes it.
//!
//! Inline span markup only ever lives in a paragraph buffer. When a
//! paragraph closes while spans are open, their closing markup is written
//! first and the spans are reopened in the next paragraph that receives
//! content. Blocks and code frames inside a span start with no spans open.

use super::context::{is_block, Context};
use super::markup::{entry_text, exit_text, wrap};
use crate::ast::vocabulary::unicode::NO_SPACE_DONT_BREAK;
use crate::ast::vocabulary::{cpp, names};
use crate::ast::{Document, Node, NodeType};
use crate::error::FormatError;

/// Nodes that only exist to trigger inclusion while parsing
fn is_ignored(name: &str) -> bool {
    matches!(name, names::INPUT | names::SOURCE_CODE)
}

pub fn serialize_document(doc: &Document) -> Result<String, FormatError> {
    let mut serializer = OdtSerializer::new(doc.title.as_ref());
    match &doc.root {
        Some(root) => serializer.walk(root)?,
        None => log::warn!("document has no body, nothing to serialize"),
    }
    Ok(serializer.finish())
}

/// Inline spans that are open in the tree walk.
#[derive(Debug, Default)]
struct Spans {
    names: Vec<String>,
    /// Whether the opening markup of every span is in the current paragraph
    written: bool,
    /// Spans set aside while a code frame runs
    parked: Vec<Vec<String>>,
}

struct OdtSerializer<'a> {
    title: Option<&'a Node>,
    context: Context,
    output: String,
    spans: Spans,
    in_title: bool,
}

impl<'a> OdtSerializer<'a> {
    fn new(title: Option<&'a Node>) -> Self {
        OdtSerializer {
            title,
            context: Context::new(),
            output: String::new(),
            spans: Spans::default(),
            in_title: false,
        }
    }

    fn finish(mut self) -> String {
        self.close_spans();
        let rest = self.context.drain();
        self.output.push_str(&rest);
        self.output
    }

    fn emit(&mut self, markup: &str) {
        self.output.push_str(markup);
    }

    /// Write the closing markup of the open spans into the paragraph about to close.
    fn close_spans(&mut self) {
        if self.spans.written && self.context.in_paragraph() {
            for name in self.spans.names.iter().rev() {
                self.context.add_text(exit_text(name));
            }
        }
        self.spans.written = false;
    }

    fn close_paragraph(&mut self) {
        if self.context.in_paragraph() {
            self.close_spans();
            let markup = self.context.pop();
            self.emit(&markup);
        }
    }

    fn open_paragraph(&mut self) {
        if !self.context.in_paragraph() {
            let markup = self.context.push(names::PARAGRAPH);
            self.emit(markup);
        }
    }

    /// Inline markup or glyphs that belong in a paragraph.
    fn add_inline(&mut self, text: &str) {
        self.open_paragraph();
        if !self.spans.written {
            for name in &self.spans.names {
                self.context.add_text(entry_text(name));
            }
            self.spans.written = true;
        }
        self.context.add_text(text);
    }

    fn walk(&mut self, node: &Node) -> Result<(), FormatError> {
        if !node.is_text() && is_ignored(&node.value) {
            return Ok(());
        }

        match node.node_type {
            NodeType::Environment => self.walk_block(node),
            NodeType::Fragment if is_block(&node.value) => self.walk_block(node),
            NodeType::Fragment => self.walk_inline(node),
            NodeType::Tag => self.walk_tag(&node.value),
            NodeType::Text => {
                self.add_inline(&node.value);
                if node.end_paragraph {
                    self.close_paragraph();
                }
                Ok(())
            }
        }
    }

    fn walk_block(&mut self, node: &Node) -> Result<(), FormatError> {
        self.close_paragraph();
        let outer = std::mem::take(&mut self.spans.names);

        let level = self.context.depth();
        let markup = self.context.push(&node.value);
        self.emit(markup);
        let result = node.children.iter().try_for_each(|child| self.walk(child));
        self.close_spans();
        let markup = self.context.pop_to(level);
        self.emit(&markup);

        self.spans.names = outer;
        self.spans.written = false;
        result
    }

    fn walk_inline(&mut self, node: &Node) -> Result<(), FormatError> {
        self.add_inline(entry_text(&node.value));
        self.spans.names.push(node.value.clone());
        let depth = self.spans.names.len();

        for child in &node.children {
            self.walk(child)?;
        }

        // an unbalanced code frame inside the span may have swapped the stack
        if self.spans.names.len() == depth {
            self.spans.names.pop();
            if self.spans.written {
                self.context.add_text(exit_text(&node.value));
            }
        }
        Ok(())
    }

    fn walk_tag(&mut self, name: &str) -> Result<(), FormatError> {
        match name {
            names::MAKE_TITLE => self.walk_title()?,
            names::ITEM => {
                let level = self.context.list_level().ok_or_else(|| {
                    FormatError::SerializationError("\\item outside of a list".to_string())
                })?;
                self.close_spans();
                let markup = self.context.pop_to(level + 1);
                self.emit(&markup);
                let markup = self.context.push(names::ITEM);
                self.emit(markup);
            }
            names::CODE_START => {
                self.close_spans();
                let markup = self.context.start_code_frame();
                self.emit(&markup);
                let outer = std::mem::take(&mut self.spans.names);
                self.spans.parked.push(outer);
            }
            names::CODE_END => {
                self.close_spans();
                let markup = self.context.end_code_frame();
                self.emit(&markup);
                if let Some(outer) = self.spans.parked.pop() {
                    self.spans.names = outer;
                }
            }
            names::UNDERSCORE => self.add_inline("_"),
            names::LDOTS => self.add_inline("\u{2026}"),
            names::TILDE | names::CODE_TILDE => self.add_inline("~"),
            names::TEXTBAR => self.add_inline("|"),
            cpp::CPP => {
                let glyphs = format!(
                    "{}{}",
                    wrap(names::BOLD_FACE, "C"),
                    wrap(names::TEXT_TT, &format!("+{NO_SPACE_DONT_BREAK}+"))
                );
                self.add_inline(&glyphs);
            }
            cpp::INCREMENT | cpp::DECREMENT => {
                let sign = if name == cpp::INCREMENT { "+" } else { "-" };
                let glyph = wrap(names::TEXT_TT, sign);
                self.add_inline(&format!("{glyph}{NO_SPACE_DONT_BREAK}{glyph}"));
            }
            _ => {}
        }
        Ok(())
    }

    /// Render the title subtree in a fresh state, then resume where the body left off.
    fn walk_title(&mut self) -> Result<(), FormatError> {
        let Some(title) = self.title else {
            return Ok(());
        };
        if self.in_title {
            return Ok(());
        }

        let saved_context = std::mem::take(&mut self.context);
        let saved_spans = std::mem::take(&mut self.spans);
        self.in_title = true;
        let result = self.walk(title);
        self.finish_title();
        self.in_title = false;
        self.context = saved_context;
        self.spans = saved_spans;
        result
    }

    /// Flush whatever the title left open before the body state comes back.
    fn finish_title(&mut self) {
        self.close_spans();
        let rest = self.context.drain();
        self.emit(&rest);
    }
}
