//! End-to-end conversions from the Markdown dialect to output markup

use crate::common::{
    assert_well_formed, highlighted_markdown_to_odt, markdown_to_odt,
};
use insta::assert_snapshot;
use odtgen_babel::external::Highlighter;
use odtgen_babel::ParseError;

#[test]
fn title_and_bold_paragraph() {
    let out = markdown_to_odt("# Title\n\nHello *world*");
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:h text:style-name="Header_Logo" text:outline-level="1">Title</text:h><text:p text:style-name="Paragraph">Hello <text:span text:style-name="Bold">world</text:span></text:p>"#);
}

#[test]
fn headings_by_hash_count() {
    let out = markdown_to_odt("Doc\n## Part\n### Detail\nBody");
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:h text:style-name="Header_Logo" text:outline-level="1">Doc</text:h><text:h text:style-name="Section" text:outline-level="2">Part</text:h><text:h text:style-name="Subsection" text:outline-level="2">Detail</text:h><text:p text:style-name="Paragraph">Body</text:p>"#);
}

#[test]
fn bullet_list() {
    let out = markdown_to_odt("Doc\n- one\n- `two`\n\nafter");
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:h text:style-name="Header_Logo" text:outline-level="1">Doc</text:h><text:list><text:list-item><text:p text:style-name="Paragraph">one</text:p></text:list-item><text:list-item><text:p text:style-name="Paragraph"><text:span text:style-name="Monospace">two</text:span></text:p></text:list-item></text:list><text:p text:style-name="Paragraph">after</text:p>"#);
}

#[test]
fn plain_fence_two_lines() {
    let out = markdown_to_odt("Doc\n```\nint a;\nif (a < b)\n```");
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:h text:style-name="Header_Logo" text:outline-level="1">Doc</text:h><text:p text:style-name="CodeLine"><text:span text:style-name="Monospace">int a;</text:span></text:p><text:p text:style-name="CodeLine"><text:span text:style-name="Monospace">if (a &lt; b)</text:span></text:p>"#);
}

#[test]
fn link_renders_its_target() {
    let out = markdown_to_odt("Doc\nRead [the docs](https://example.org) first");
    assert_well_formed(&out);
    assert!(out.contains(
        "Read <text:span text:style-name=\"Monospace\">https://example.org</text:span> first"
    ));
    assert!(!out.contains("the docs"));
}

struct KeywordHighlighter;

impl Highlighter for KeywordHighlighter {
    fn highlight(&self, _language: &str, lines: &[String]) -> Result<String, ParseError> {
        Ok(lines
            .iter()
            .map(|line| format!("\\hlkwa{{{line}}}\\\\\n"))
            .collect())
    }
}

#[test]
fn highlighted_fence_goes_through_the_macro_parser() {
    let out = highlighted_markdown_to_odt(KeywordHighlighter, "Doc\n```rust\nfn\nlet\n```");
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:h text:style-name="Header_Logo" text:outline-level="1">Doc</text:h><text:p text:style-name="CodeLine"><text:span text:style-name="HighlightKeywordA">fn</text:span></text:p><text:p text:style-name="CodeLine"><text:span text:style-name="HighlightKeywordA">let</text:span></text:p>"#);
}
