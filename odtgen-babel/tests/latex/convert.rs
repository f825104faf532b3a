//! End-to-end conversions from the macro dialect to output markup

use crate::common::{assert_well_formed, latex_to_odt, latex_to_odt_with};
use insta::assert_snapshot;
use odtgen_babel::external::MemorySourceLoader;
use odtgen_babel::{FormatError, ParseError};

#[test]
fn section_and_bold_paragraph() {
    let out = latex_to_odt(
        "\\title{Sample}\\begin{document}\\section{Intro}Hello \\textbf{world}.\\end{document}",
    );
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:h text:style-name="Section" text:outline-level="2">Intro</text:h><text:p text:style-name="Paragraph">Hello <text:span text:style-name="Bold">world</text:span>.</text:p>"#);
}

#[test]
fn maketitle_places_the_title_heading() {
    let out = latex_to_odt(
        "\\title{Sample}\\begin{document}\\maketitle\\section{Intro}Text\\end{document}",
    );
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:h text:style-name="Header_Logo" text:outline-level="1">Sample</text:h><text:h text:style-name="Section" text:outline-level="2">Intro</text:h><text:p text:style-name="Paragraph">Text</text:p>"#);
}

#[test]
fn three_items_in_a_list() {
    let out = latex_to_odt(
        "\\begin{document}\\begin{itemize}\\item A\\item \\textbf{B}\\item C\\end{itemize}\\end{document}",
    );
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:list><text:list-item><text:p text:style-name="Paragraph"> A</text:p></text:list-item><text:list-item><text:p text:style-name="Paragraph"><text:span text:style-name="Bold">B</text:span></text:p></text:list-item><text:list-item><text:p text:style-name="Paragraph"> C</text:p></text:list-item></text:list>"#);
}

#[test]
fn nested_lists_close_back_to_their_level() {
    let out = latex_to_odt(
        "\\begin{document}\\begin{enumerate}\\item A\\begin{itemize}\\item B\\end{itemize}\\item C\\end{enumerate}\\end{document}",
    );
    assert_well_formed(&out);
    assert_snapshot!(out, @r#"<text:list text:style-name="Enumerate"><text:list-item><text:p text:style-name="Paragraph"> A</text:p><text:list><text:list-item><text:p text:style-name="Paragraph"> B</text:p></text:list-item></text:list></text:list-item><text:list-item><text:p text:style-name="Paragraph"> C</text:p></text:list-item></text:list>"#);
}

#[test]
fn paragraphs_split_on_blank_lines() {
    let out = latex_to_odt("\\begin{document}First\nline\n\nSecond\\end{document}");
    assert_snapshot!(out, @r#"<text:p text:style-name="Paragraph">First line</text:p><text:p text:style-name="Paragraph">Second</text:p>"#);
}

#[test]
fn included_source_becomes_code_lines() {
    let loader = MemorySourceLoader::new()
        .with_source("listing", "\\hlkwa{int}~x;\\\\\n\\hlcom{//done}\\\\\n");
    let out = latex_to_odt_with(
        loader,
        "\\begin{document}Before\\sourcecodefile{listing}After\\end{document}",
    )
    .unwrap();
    assert_well_formed(&out);
    // the tilde survives code mode as a non-breaking space
    assert_eq!(
        out,
        "<text:p text:style-name=\"Paragraph\">Before</text:p>\
         <text:p text:style-name=\"CodeLine\"><text:span text:style-name=\"HighlightKeywordA\">int</text:span>\u{a0}x;</text:p>\
         <text:p text:style-name=\"CodeLine\"><text:span text:style-name=\"HighlightComment\">//done</text:span></text:p>\
         <text:p text:style-name=\"Paragraph\">After</text:p>"
    );
}

#[test]
fn operator_macros_and_glyph_tags() {
    let out = latex_to_odt(
        "\\begin{document}a\\cppLessEqual{}b\\ldots \\textunderscore\\end{document}",
    );
    assert_well_formed(&out);
    assert!(out.contains("<text:span text:style-name=\"Monospace\">&lt;\u{2060}=</text:span>"));
    assert!(out.contains("\u{2026}"));
    assert!(out.contains('_'));
}

#[test]
fn missing_body_gives_empty_output() {
    assert_eq!(latex_to_odt("\\title{Only a title}"), "");
}

#[test]
fn hard_failures_abort_the_conversion() {
    let cases = [
        ("\\begin{document}\\frobnicate\\end{document}", "Unhandled token"),
        ("\\begin{document}\\begin{tabular}\\end{tabular}\\end{document}", "Unknown environment"),
        ("\\begin{document}}\\end{document}", "closing brace"),
        ("\\begin{document}\\begin{itemize}\\end{enumerate}\\end{document}", "endMarker"),
        ("\\begin{document}\\sourcecodefile{gone}\\end{document}", "sourcecodefile"),
    ];
    for (source, message) in cases {
        match latex_to_odt_with(MemorySourceLoader::new(), source) {
            Err(FormatError::Parse(err)) => {
                assert!(err.to_string().contains(message), "{source}: {err}")
            }
            other => panic!("{source}: expected a parse error, got {other:?}"),
        }
    }
}

#[test]
fn item_outside_list_fails_serialization() {
    let result = latex_to_odt_with(
        MemorySourceLoader::new(),
        "\\begin{document}\\item stray\\end{document}",
    );
    assert!(matches!(result, Err(FormatError::SerializationError(_))));
}

#[test]
fn sourcecodefile_needs_a_plain_name() {
    let result = latex_to_odt_with(
        MemorySourceLoader::new(),
        "\\begin{document}\\sourcecodefile{a\\textbf{b}}\\end{document}",
    );
    assert_eq!(
        result.unwrap_err(),
        FormatError::Parse(ParseError::SourceCodeArity(2))
    );
}

#[test]
fn heading_inside_bold_splits_the_span() {
    let out = latex_to_odt("\\begin{document}\\textbf{a \\section{X} b}\\end{document}");
    assert_well_formed(&out);
    assert_eq!(
        out,
        "<text:p text:style-name=\"Paragraph\"><text:span text:style-name=\"Bold\">a </text:span></text:p>\
         <text:h text:style-name=\"Section\" text:outline-level=\"2\">X</text:h>\
         <text:p text:style-name=\"Paragraph\"><text:span text:style-name=\"Bold\"> b</text:span></text:p>"
    );
}

#[test]
fn list_inside_italic_closes_the_span_first() {
    let out = latex_to_odt(
        "\\begin{document}\\textit{x \\begin{itemize}\\item y\\end{itemize}}\\end{document}",
    );
    assert_well_formed(&out);
    assert_eq!(
        out,
        "<text:p text:style-name=\"Paragraph\"><text:span text:style-name=\"Italic\">x </text:span></text:p>\
         <text:list><text:list-item><text:p text:style-name=\"Paragraph\"> y</text:p></text:list-item></text:list>"
    );
}

#[test]
fn included_source_inside_bold_is_not_bold() {
    let loader = MemorySourceLoader::new().with_source("l", "x;");
    let out = latex_to_odt_with(
        loader,
        "\\begin{document}\\textbf{see \\sourcecodefile{l}}\\end{document}",
    )
    .unwrap();
    assert_well_formed(&out);
    assert_eq!(
        out,
        "<text:p text:style-name=\"Paragraph\"><text:span text:style-name=\"Bold\">see </text:span></text:p>\
         <text:p text:style-name=\"CodeLine\">x;</text:p>"
    );
}

#[test]
fn title_breaks_do_not_leak_into_the_body() {
    let out = latex_to_odt(
        "\\title{A\\\\B}\\begin{document}\\textbf{x\\maketitle}y\\end{document}",
    );
    assert_well_formed(&out);
    assert_eq!(
        out,
        "<text:h text:style-name=\"Header_Logo\" text:outline-level=\"1\">A</text:h>\
         <text:p text:style-name=\"Paragraph\">B</text:p>\
         <text:p text:style-name=\"Paragraph\"><text:span text:style-name=\"Bold\">x</text:span>y</text:p>"
    );
}
