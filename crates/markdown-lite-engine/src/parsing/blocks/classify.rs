use log::trace;

use crate::parsing::{inline::rewrite_inline, sanitize};

use super::{
    kinds::{Heading, Image, ListItem, Table, ThematicBreak},
    types::{BlockKind, BlockNode},
};

/// Classifies individual lines into block nodes.
///
/// Classification is line-local: a list item is a `ListItem` wherever it
/// appears, and grouping is left to `BlockBuilder`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies one line. Total: every input yields exactly one node.
    ///
    /// The line is sanitized first (one leading zero-width character removed,
    /// `<`/`>` escaped). Rules are then tried in order and the first match
    /// wins: heading 1-6, `---`, list item, table, image, empty line,
    /// paragraph. The rule test precedes the list test because `---` would
    /// otherwise read as a list item.
    ///
    /// Image fields become attribute values, which the renderer escapes, so
    /// they are taken from the line before `<`/`>` escaping.
    pub fn classify(&self, line: &str) -> BlockNode {
        let raw = sanitize::strip_zero_width(line);
        let text = sanitize::escape_angle_brackets(raw);
        let node = Self::classify_sanitized(raw, &text);
        trace!("classified {line:?} as {:?}", node.kind);
        node
    }

    fn classify_sanitized(raw: &str, text: &str) -> BlockNode {
        if let Some((level, rest)) = Heading::strip(text) {
            return BlockNode::new(BlockKind::Heading(level), rewrite_inline(rest));
        }
        if ThematicBreak::matches(text) {
            return BlockNode::void(BlockKind::ThematicBreak);
        }
        if let Some(rest) = ListItem::strip(text) {
            return BlockNode::new(BlockKind::ListItem, rewrite_inline(rest));
        }
        if let Some(table) = Table::parse(text) {
            return BlockNode::void(BlockKind::Table(table));
        }
        if let Some(image) = Image::parse(raw) {
            return BlockNode::void(BlockKind::Image(image));
        }
        if text.is_empty() {
            return BlockNode::void(BlockKind::LineBreak);
        }
        BlockNode::new(BlockKind::Paragraph, rewrite_inline(text))
    }
}

/// Convenience for `MarkdownLineClassifier.classify(line)`.
pub fn classify_line(line: &str) -> BlockNode {
    MarkdownLineClassifier.classify(line)
}
