//! The debug dump through the registry

use odtgen_babel::FormatRegistry;

#[test]
fn latex_tree_dump() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(
            "\\title{T}\\begin{document}\\section{S}x\n\ny\\end{document}",
            "latex",
        )
        .unwrap();
    let dump = registry.serialize(&doc, "treeviz").unwrap();
    assert_eq!(
        dump,
        "type = Fragment, value = _title_, endParagraph = false\n\
         \ttype = Text, value = _T_, endParagraph = false\n\
         type = Environment, value = _document_, endParagraph = false\n\
         \ttype = Fragment, value = _section_, endParagraph = false\n\
         \t\ttype = Text, value = _S_, endParagraph = false\n\
         \ttype = Text, value = _x_, endParagraph = true\n\
         \ttype = Text, value = _y_, endParagraph = false\n"
    );
}

#[test]
fn convert_runs_both_halves() {
    let registry = FormatRegistry::default();
    let out = odtgen_babel::convert(
        &registry,
        "Doc\n\nplain",
        "markdown",
        "odt",
    )
    .unwrap();
    assert!(out.ends_with("<text:p text:style-name=\"Paragraph\">plain</text:p>"));
}
