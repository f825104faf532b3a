//! Line-oriented parser for the Markdown dialect
//!
//! The first line is the title. Every following line is classified by its
//! leading characters: list items, code fences, headings by hash count,
//! or plain paragraphs. Inline content supports `*bold*`, `` `code` `` and
//! links, of which only the target survives.

use crate::ast::vocabulary::names;
use crate::ast::{Document, Node};
use crate::common::escape_entities;
use crate::error::ParseError;
use crate::external::{Highlighter, MemorySourceLoader};
use crate::formats::latex::LatexParser;

pub struct MarkdownParser<'a> {
    highlighter: Option<&'a dyn Highlighter>,
    in_code: bool,
}

impl<'a> MarkdownParser<'a> {
    pub fn new(highlighter: Option<&'a dyn Highlighter>) -> Self {
        MarkdownParser {
            highlighter,
            in_code: false,
        }
    }

    pub fn parse_document(&mut self, source: &str) -> Result<Document, ParseError> {
        let mut lines = source.lines().enumerate().peekable();
        let mut root = Node::named(names::DOCUMENT)?;

        let title = match lines.next() {
            Some((_, first)) => {
                let mut title = Node::named(names::TITLE)?;
                self.parse_inline(first.trim_start_matches('#').trim_start(), &mut title)?;
                root.push_named(names::MAKE_TITLE)?;
                Some(title)
            }
            None => None,
        };

        while let Some((number, line)) = lines.next() {
            if line.trim().is_empty() || line == "---" {
                continue;
            }

            if line.starts_with('-') {
                let list = root.push_named(names::ITEMIZE)?;
                self.parse_item(list, line)?;
                while let Some((_, next)) = lines.next_if(|(_, next)| next.starts_with('-')) {
                    self.parse_item(list, next)?;
                }
                continue;
            }

            if let Some(language) = line.strip_prefix("```") {
                let mut code = Vec::new();
                loop {
                    match lines.next() {
                        None => return Err(ParseError::UnterminatedCodeFence { line: number + 1 }),
                        Some((_, fence)) if fence.starts_with("```") => break,
                        Some((_, code_line)) => code.push(code_line.to_string()),
                    }
                }

                root.push_named(names::CODE_START)?;
                self.push_code(&mut root, language.trim(), &code)?;
                root.push_named(names::CODE_END)?;
                continue;
            }

            let hashes = line.chars().take_while(|&c| c == '#').count();
            let name = match hashes {
                1 | 2 => names::SECTION,
                3 | 4 => names::SUBSECTION,
                _ => names::PARAGRAPH,
            };
            let block = root.push_named(name)?;
            self.parse_inline(line[hashes..].trim_start(), block)?;
        }

        Ok(Document::new(title, Some(root)))
    }

    fn parse_item(&mut self, list: &mut Node, line: &str) -> Result<(), ParseError> {
        list.push_named(names::ITEM)?;
        self.parse_inline(line[1..].trim_start(), list)
    }

    fn push_code(&mut self, root: &mut Node, language: &str, lines: &[String]) -> Result<(), ParseError> {
        if !language.is_empty() {
            match self.highlighter {
                Some(highlighter) => {
                    let highlighted = highlighter.highlight(language, lines)?;
                    let no_includes = MemorySourceLoader::new();
                    return LatexParser::new("", &no_includes).parse_code(&highlighted, root);
                }
                None => log::warn!("no highlighter configured, {language} block rendered as plain code"),
            }
        }

        for line in lines {
            root.push_named(names::CODE_LINE)?
                .push_named(names::TEXT_TT)?
                .push_text(escape_entities(line).into_owned());
        }
        Ok(())
    }

    fn parse_inline(&mut self, text: &str, node: &mut Node) -> Result<(), ParseError> {
        let chars: Vec<char> = text.chars().collect();
        let mut idx = 0;
        self.parse_span(&chars, &mut idx, node, None)
    }

    fn parse_span(
        &mut self,
        chars: &[char],
        idx: &mut usize,
        node: &mut Node,
        end: Option<char>,
    ) -> Result<(), ParseError> {
        let mut content = String::new();

        while let Some(&current) = chars.get(*idx) {
            *idx += 1;
            if Some(current) == end {
                flush(node, &mut content);
                return Ok(());
            }

            if !self.in_code && current == '[' {
                flush(node, &mut content);
                let open = find(chars, *idx, '(')?;
                let close = find(chars, open + 1, ')')?;
                let url: String = chars[open + 1..close].iter().collect();
                node.push_named(names::TEXT_TT)?
                    .push_text(escape_entities(&url).into_owned());
                *idx = close + 1;
                continue;
            }

            let fragment = match current {
                '*' => Some(names::BOLD_FACE),
                '`' => Some(names::TEXT_TT),
                _ => None,
            };
            match fragment {
                Some(name) if !self.in_code => {
                    flush(node, &mut content);
                    let child = node.push_named(name)?;
                    let code_span = current == '`';
                    self.in_code |= code_span;
                    self.parse_span(chars, idx, child, Some(current))?;
                    if code_span {
                        self.in_code = false;
                    }
                }
                _ => content.push(current),
            }
        }

        flush(node, &mut content);
        Ok(())
    }
}

fn flush(node: &mut Node, content: &mut String) {
    if content.is_empty() {
        return;
    }
    node.push_text(escape_entities(content).into_owned());
    content.clear();
}

fn find(chars: &[char], from: usize, wanted: char) -> Result<usize, ParseError> {
    chars
        .iter()
        .skip(from)
        .position(|&c| c == wanted)
        .map(|offset| from + offset)
        .ok_or_else(|| ParseError::UnexpectedEof {
            offset: chars.len(),
            expected: format!("'{wanted}' in link"),
        })
}
