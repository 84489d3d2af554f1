//! Document-level tests for the parsing module.

use pretty_assertions::assert_eq;

use crate::parsing::{
    Document, classify_lines,
    blocks::{BlockKind, BlockNode, DocumentBlock, HeadingLevel, ListGroup},
    lines::LineSplitting,
    parse_document,
};

fn plain(text: &str) -> Document {
    parse_document(text, LineSplitting::Newline)
}

#[test]
fn empty_input_is_a_single_break() {
    assert_eq!(
        plain("").blocks,
        vec![DocumentBlock::Block(BlockNode::void(BlockKind::LineBreak))]
    );
    assert_eq!(
        parse_document("", LineSplitting::PreserveBreaks).blocks,
        vec![DocumentBlock::Block(BlockNode::void(BlockKind::LineBreak))]
    );
}

#[test]
fn consecutive_items_form_one_list() {
    assert_eq!(
        plain("- a\n- b").blocks,
        vec![DocumentBlock::List(ListGroup {
            items: vec![
                BlockNode::new(BlockKind::ListItem, " a"),
                BlockNode::new(BlockKind::ListItem, " b"),
            ],
        })]
    );
}

#[test]
fn interrupted_items_form_two_lists() {
    let doc = plain("- a\ntext\n- b");
    assert_eq!(doc.blocks.len(), 3);
    assert!(matches!(&doc.blocks[0], DocumentBlock::List(g) if g.items.len() == 1));
    assert!(matches!(
        &doc.blocks[1],
        DocumentBlock::Block(BlockNode {
            kind: BlockKind::Paragraph,
            ..
        })
    ));
    assert!(matches!(&doc.blocks[2], DocumentBlock::List(g) if g.items.len() == 1));
}

#[test]
fn item_after_heading_is_still_grouped() {
    let doc = plain("# Title\n- a");
    assert!(matches!(
        &doc.blocks[0],
        DocumentBlock::Block(BlockNode {
            kind: BlockKind::Heading(HeadingLevel::H1),
            ..
        })
    ));
    assert!(matches!(&doc.blocks[1], DocumentBlock::List(_)));
}

#[test]
fn raw_classification_has_no_groups() {
    let nodes = classify_lines("- a\n- b", LineSplitting::Newline);
    assert_eq!(
        nodes,
        vec![
            BlockNode::new(BlockKind::ListItem, " a"),
            BlockNode::new(BlockKind::ListItem, " b"),
        ]
    );
}

#[test]
fn preserved_breaks_stay_inside_blocks() {
    let nodes = classify_lines("- a\n- b\n---\n\nend", LineSplitting::PreserveBreaks);
    assert_eq!(
        nodes,
        vec![
            BlockNode::new(BlockKind::ListItem, " a<br>"),
            BlockNode::new(BlockKind::ListItem, " b<br>"),
            BlockNode::void(BlockKind::ThematicBreak),
            BlockNode::void(BlockKind::LineBreak),
            BlockNode::new(BlockKind::Paragraph, "end"),
        ]
    );
}

#[test]
fn trailing_newline_differs_by_strategy() {
    assert_eq!(plain("a\n").blocks.len(), 2);
    assert_eq!(
        parse_document("a\n", LineSplitting::PreserveBreaks).blocks,
        vec![DocumentBlock::Block(BlockNode::new(
            BlockKind::Paragraph,
            "a<br>"
        ))]
    );
}

#[test]
fn order_is_preserved() {
    let doc = plain("# h\n---\n!@img@(a.png)[A]\n\np");
    let kinds: Vec<_> = doc
        .blocks
        .iter()
        .map(|b| match b {
            DocumentBlock::Block(n) => format!("{:?}", n.kind),
            DocumentBlock::List(_) => "List".to_string(),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "Heading(H1)",
            "ThematicBreak",
            "Image(ImageSpec { src: \"a.png\", alt: \"A\" })",
            "LineBreak",
            "Paragraph",
        ]
    );
}
