//! Property tests for the macro dialect parser and the serializer

use crate::common::assert_well_formed;
use odtgen_babel::external::MemorySourceLoader;
use odtgen_babel::format::Format;
use odtgen_babel::formats::latex::LatexParser;
use odtgen_babel::formats::{LatexFormat, OdtFormat};
use proptest::prelude::*;

const LISTING: &str = "listing";

fn loader() -> MemorySourceLoader {
    MemorySourceLoader::new().with_source(LISTING, "int x;\\\\\nreturn;")
}

/// Inline content with balanced braces: plain groups, bold and italic spans.
fn inline_content() -> impl Strategy<Value = String> {
    let leaf = "[a-z <>&]{0,8}";
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| format!("{{{s}}}")),
            inner.clone().prop_map(|s| format!("\\textbf{{{s}}}")),
            inner.clone().prop_map(|s| format!("\\textit{{{s}}}")),
            inner.clone().prop_map(|s| format!("{s}\\\\")),
            inner.clone().prop_map(|s| format!("{s}\n\n")),
            prop::collection::vec(inner, 1..4).prop_map(|parts| parts.concat()),
        ]
    })
}

/// Spans that contain a heading, a list, included code or the title.
fn span_around_block() -> impl Strategy<Value = String> {
    (inline_content(), inline_content(), 0..4usize).prop_map(|(a, b, kind)| match kind {
        0 => format!("\\textbf{{{a} \\section{{{b}}} {a}}}"),
        1 => format!("\\textit{{{a} \\begin{{itemize}}\\item {b}\\end{{itemize}}}}"),
        2 => format!("\\textbf{{{a} \\sourcecodefile{{{LISTING}}}{b}}}"),
        _ => format!("\\textbf{{{a}\\maketitle {b}}}"),
    })
}

fn paragraph() -> impl Strategy<Value = String> {
    prop_oneof![inline_content(), span_around_block()]
}

/// Top-level blocks: paragraphs, sections and lists around inline content.
fn block() -> impl Strategy<Value = String> {
    prop_oneof![
        paragraph(),
        inline_content().prop_map(|s| format!("\\section{{{s}}}")),
        prop::collection::vec(paragraph(), 1..4).prop_map(|items| {
            let body: String = items.iter().map(|item| format!("\\item {item}")).collect();
            format!("\\begin{{itemize}}{body}\\end{{itemize}}")
        }),
    ]
}

fn document(blocks: &[String]) -> String {
    format!(
        "\\title{{T\\\\U}}\\begin{{document}}{}\\end{{document}}",
        blocks.concat()
    )
}

proptest! {
    #[test]
    fn balanced_input_leaves_no_pending_braces(content in paragraph()) {
        let loader = loader();
        let source = format!("\\begin{{document}}{content}\\end{{document}}");
        let mut parser = LatexParser::new(&source, &loader);
        prop_assert!(parser.parse_document().is_ok());
        prop_assert_eq!(parser.pending_braces(), 0);
    }

    #[test]
    fn serialized_output_is_well_formed(blocks in prop::collection::vec(block(), 0..5)) {
        let source = document(&blocks);
        let doc = LatexFormat::new(loader()).parse(&source).unwrap();
        let out = OdtFormat.serialize(&doc).unwrap();
        assert_well_formed(&out);
    }

    #[test]
    fn one_blank_line_gives_two_paragraphs(first in "[a-z]{1,8}", second in "[a-z]{1,8}") {
        let source = format!("\\begin{{document}}{first}\n\n{second}\\end{{document}}");
        let doc = LatexFormat::new(MemorySourceLoader::new()).parse(&source).unwrap();
        let root = doc.root.unwrap();
        prop_assert_eq!(root.children.len(), 2);
        prop_assert!(root.children[0].end_paragraph);
        prop_assert_eq!(&root.children[0].value, &first);
        prop_assert_eq!(&root.children[1].value, &second);
    }
}
