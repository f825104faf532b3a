//! Recursive-descent parser for the macro dialect
//!
//! The parser walks the input one character at a time. Plain characters
//! accumulate into a pending text run; a backslash starts a macro, which is
//! dispatched on its classification:
//!
//! - special characters after the backslash are escapes (`\\` ends a paragraph)
//! - tags become childless nodes, except the few that stand for a literal
//! - fragments recurse with `}` as the end marker
//! - `\begin{..}` recurses with the matching `end{..}` marker, `\end{..}` returns
//! - anything else must be an operator glyph from the symbol table
//!
//! Pending text is flushed into text nodes whenever a node is appended, so
//! text and nodes keep their source order. Flushing normalises the run and
//! splits it on blank lines into one text node per paragraph.

use super::cursor::{is_special, Cursor};
use crate::ast::vocabulary::unicode::{NON_BREAKING_SPACE, NO_SPACE_DONT_BREAK};
use crate::ast::vocabulary::{self, names};
use crate::ast::{Document, Node};
use crate::common::{escape_entities, symbol_markup};
use crate::error::ParseError;
use crate::external::SourceLoader;

/// What the caller of a macro dispatch should do next.
enum Flow {
    Continue,
    /// The innermost environment was closed by its `\end{..}`
    Close,
}

pub struct LatexParser<'a> {
    cursor: Cursor,
    loader: &'a dyn SourceLoader,
}

impl<'a> LatexParser<'a> {
    pub fn new(source: &str, loader: &'a dyn SourceLoader) -> Self {
        LatexParser {
            cursor: Cursor::new(source),
            loader,
        }
    }

    /// Extract the title and the document body, in that order.
    ///
    /// A missing title or body is not an error; the part is left empty.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let title = self.extract(names::TITLE)?;
        let root = self.extract(names::DOCUMENT)?;
        Ok(Document::new(title, root))
    }

    /// Find the begin marker of `token` from the cursor on and parse up to its end marker.
    pub fn extract(&mut self, token: &str) -> Result<Option<Node>, ParseError> {
        let pattern = vocabulary::begin_marker(token)?;
        if !self.cursor.seek(&pattern) {
            log::warn!("extract: pattern '{pattern}' not found");
            return Ok(None);
        }
        self.cursor.skip(pattern.chars().count());

        let mut root = Node::named(token)?;
        self.parse_source(&mut root, &vocabulary::end_marker(token)?)?;
        Ok(Some(root))
    }

    /// Open braces that were never matched by a closing brace.
    pub fn pending_braces(&self) -> usize {
        self.cursor.brace_count
    }

    /// Parse `text` in code mode, appending its nodes to `node`.
    ///
    /// The text gets a cursor of its own; the current one is restored afterwards.
    pub fn parse_code(&mut self, text: &str, node: &mut Node) -> Result<(), ParseError> {
        let mut code_cursor = Cursor::new(text);
        code_cursor.in_code = true;
        let parked = std::mem::replace(&mut self.cursor, code_cursor);
        let result = self.parse_source(node, "");
        self.cursor = parked;
        result
    }

    fn parse_source(&mut self, node: &mut Node, end_marker: &str) -> Result<(), ParseError> {
        log::debug!(
            "parse_source at offset {}, end marker '{end_marker}'",
            self.cursor.position()
        );
        let mut content = String::new();

        while let Some(c) = self.cursor.current() {
            match c {
                '}' => {
                    if self.cursor.brace_count != 0 {
                        self.cursor.brace_count -= 1;
                        self.cursor.advance();
                    } else if end_marker == "}" {
                        self.flush_text(node, &mut content, false);
                        self.cursor.advance();
                        return Ok(());
                    } else {
                        return Err(ParseError::UnexpectedClosingBrace {
                            offset: self.cursor.position(),
                        });
                    }
                }
                '\\' => {
                    self.cursor.advance();
                    if let Flow::Close = self.parse_macro(node, &mut content, end_marker)? {
                        return Ok(());
                    }
                }
                _ => {
                    self.parse_char(node, &mut content, c)?;
                    self.cursor.advance();
                }
            }
        }

        if !end_marker.is_empty() {
            return Err(ParseError::UnexpectedEof {
                offset: self.cursor.position(),
                expected: end_marker.to_string(),
            });
        }
        self.flush_text(node, &mut content, false);
        Ok(())
    }

    fn parse_macro(
        &mut self,
        node: &mut Node,
        content: &mut String,
        end_marker: &str,
    ) -> Result<Flow, ParseError> {
        let token = self.cursor.next_token()?;
        log::debug!(
            "token = {token:?}, next = {:?}, braces = {}",
            self.cursor.current(),
            self.cursor.brace_count
        );

        let first = token.chars().next().unwrap_or(' ');
        if is_special(first) || first.is_whitespace() {
            if first == '\\' {
                self.flush_text(node, content, true);
            } else if first != '\n' {
                content.push_str(&token);
            }
            return Ok(Flow::Continue);
        }

        if vocabulary::is_tag(&token) {
            self.flush_text(node, content, false);
            match token.as_str() {
                names::QUOTE => content.push('"'),
                names::BACKSLASH | names::TEXT_BACKSLASH => content.push('\\'),
                _ => {
                    node.push_named(&token)?;
                }
            }
            // the scanner swallowed a delimiter that belongs to the text
            if matches!(self.cursor.previous(), Some(' ' | '{' | '}')) {
                self.cursor.retreat();
            }
            return Ok(Flow::Continue);
        }

        if vocabulary::is_fragment(&token) {
            self.parse_fragment(node, content, &token)?;
            return Ok(Flow::Continue);
        }

        if token == names::BEGIN || token == names::END {
            self.flush_text(node, content, false);
            let is_begin = token == names::BEGIN;
            let env = self.cursor.next_token()?;
            if !vocabulary::is_environment(&env) {
                return Err(ParseError::UnknownEnvironment(env));
            }

            if env == names::VERBATIM {
                self.cursor.in_code = is_begin;
                return Ok(Flow::Continue);
            }

            if is_begin {
                let mut child = Node::named(&env)?;
                self.parse_source(&mut child, &vocabulary::end_marker(&env)?)?;
                node.push(child);
                return Ok(Flow::Continue);
            }

            let found = format!("{}{{{env}}}", names::END);
            if found != end_marker {
                return Err(ParseError::EndMarkerMismatch {
                    expected: end_marker.to_string(),
                    found,
                });
            }
            return Ok(Flow::Close);
        }

        let markup = symbol_markup(&token).ok_or(ParseError::UnhandledToken(token))?;
        self.flush_text(node, content, false);
        node.push_text(markup);
        if self.cursor.current() == Some('}') {
            self.cursor.advance();
        }
        Ok(Flow::Continue)
    }

    fn parse_fragment(
        &mut self,
        node: &mut Node,
        content: &mut String,
        token: &str,
    ) -> Result<(), ParseError> {
        // empty argument: nothing to build
        if self.cursor.current() == Some('}') {
            self.cursor.advance();
            if token == names::MBOX && self.cursor.in_code && self.cursor.current() == Some('\n') {
                self.cursor.advance();
            }
            return Ok(());
        }

        if token == names::HSPACE {
            if !self.cursor.advance_until('}') {
                return Err(ParseError::UnexpectedEof {
                    offset: self.cursor.position(),
                    expected: "}".to_string(),
                });
            }
            self.cursor.advance();
            content.push_str(NO_SPACE_DONT_BREAK);
            return Ok(());
        }

        self.flush_text(node, content, false);
        let mut child = Node::named(token)?;
        self.parse_source(&mut child, "}")?;

        if token == names::SOURCE_CODE {
            let name = match child.children.as_slice() {
                [only] => only.value.clone(),
                other => return Err(ParseError::SourceCodeArity(other.len())),
            };
            node.push(child);
            self.include_source(node, &name)
        } else {
            node.push(child);
            Ok(())
        }
    }

    /// Append the included source to `node`, framed by code sentinels.
    fn include_source(&mut self, node: &mut Node, name: &str) -> Result<(), ParseError> {
        let text = self.loader.load(name)?;
        log::debug!("parsing included source '{name}' in code mode");
        node.push_named(names::CODE_START)?;
        self.parse_code(&text, node)?;
        node.push_named(names::CODE_END)?;
        Ok(())
    }

    fn parse_char(&mut self, node: &mut Node, content: &mut String, c: char) -> Result<(), ParseError> {
        match c {
            '{' => self.cursor.brace_count += 1,
            '$' => {
                if !self.cursor.in_code {
                    self.cursor.in_math = !self.cursor.in_math;
                }
            }
            '^' if self.cursor.in_math => {
                self.flush_text(node, content, false);
                self.cursor.advance();
                let mut child = Node::named(names::SUPERSCRIPT)?;
                let next = self.cursor.expect_current("a superscript")?;
                if next == '{' {
                    self.cursor.advance();
                    self.parse_source(&mut child, "}")?;
                    // the caller advances past the current character
                    self.cursor.retreat();
                } else {
                    child.push_text(escape_entities(&next.to_string()).into_owned());
                }
                node.push(child);
            }
            ' ' => {
                // spaces in code mode are dropped; highlighted code escapes the ones it keeps
                if !self.cursor.in_code {
                    content.push(' ');
                }
            }
            other => content.push(other),
        }
        Ok(())
    }

    /// Turn the pending run into text nodes, one per paragraph.
    fn flush_text(&self, node: &mut Node, content: &mut String, end_paragraph: bool) {
        let in_code = self.cursor.in_code;
        if !in_code && !end_paragraph && content.trim().is_empty() {
            content.clear();
            return;
        }

        let mut text = content.replace('~', NON_BREAKING_SPACE);
        if !in_code {
            text = text.replace("---", "\u{2013}").replace("--", "\u{2013}");
        }
        let text = escape_entities(&text);

        let mut paragraphs: Vec<String> = text
            .split("\n\n")
            .map(|part| {
                if in_code {
                    part.replace('\n', "")
                } else {
                    part.replace('\n', " ")
                }
            })
            .collect();
        let last = paragraphs.pop().unwrap_or_default();
        for paragraph in paragraphs {
            node.push(Node::text(paragraph).with_end_paragraph(true));
        }
        node.push(Node::text(last).with_end_paragraph(end_paragraph));
        content.clear();
    }
}
