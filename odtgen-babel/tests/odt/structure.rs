//! Serializer behaviour on hand-built trees

use crate::common::assert_well_formed;
use odtgen_babel::ast::vocabulary::names;
use odtgen_babel::format::Format;
use odtgen_babel::formats::odt::context::Context;
use odtgen_babel::formats::OdtFormat;
use odtgen_babel::{Document, Node};

fn named(name: &str) -> Node {
    Node::named(name).unwrap()
}

#[test]
fn third_item_closes_exactly_what_the_second_opened() {
    let mut context = Context::new();
    context.push(names::DOCUMENT);
    context.push(names::ITEMIZE);
    let level = context.list_level().unwrap();

    for _ in 0..2 {
        context.pop_to(level + 1);
        context.push(names::ITEM);
    }
    // the second item still has an open paragraph
    context.push(names::PARAGRAPH);
    context.add_text("two");
    assert_eq!(context.depth(), 4);

    let closed = context.pop_to(level + 1);
    assert_eq!(
        closed,
        "<text:p text:style-name=\"Paragraph\">two</text:p></text:list-item>"
    );
    assert_eq!(context.depth(), 2);
}

#[test]
fn unclosed_contexts_are_drained_at_the_end() {
    // the code frame is never ended
    let mut root = named(names::DOCUMENT);
    let list = root.push_named(names::ENUMERATE).unwrap();
    list.push_named(names::ITEM).unwrap();
    list.push_text("open");
    root.push_named(names::CODE_START).unwrap();
    root.push_text("never closed");

    let out = OdtFormat
        .serialize(&Document::new(None, Some(root)))
        .unwrap();
    assert_well_formed(&out);
    assert!(out.ends_with("<text:p text:style-name=\"CodeLine\">never closed</text:p>"));
}

#[test]
fn title_rendering_does_not_disturb_the_body() {
    let mut title = named(names::TITLE);
    title.push_text("Heading");
    let mut root = named(names::DOCUMENT);
    let list = root.push_named(names::ITEMIZE).unwrap();
    list.push_named(names::ITEM).unwrap();
    list.push_text("before ");
    list.push_named(names::MAKE_TITLE).unwrap();
    list.push_text("after");

    let out = OdtFormat
        .serialize(&Document::new(Some(title), Some(root)))
        .unwrap();
    assert_well_formed(&out);
    assert_eq!(
        out,
        "<text:list><text:list-item>\
         <text:h text:style-name=\"Header_Logo\" text:outline-level=\"1\">Heading</text:h>\
         <text:p text:style-name=\"Paragraph\">before after</text:p>\
         </text:list-item></text:list>"
    );
}
