pub mod blocks;
pub mod inline;
pub mod lines;
pub mod sanitize;
pub mod span;

#[cfg(test)]
mod tests;

use log::debug;

use blocks::{BlockBuilder, BlockNode, DocumentBlock, MarkdownLineClassifier};
use lines::{LineSplitting, split_lines};

/// A converted document: top-level blocks in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<DocumentBlock>,
}

/// Classifies every line, in order, without grouping list items.
pub fn classify_lines(text: &str, strategy: LineSplitting) -> Vec<BlockNode> {
    let classifier = MarkdownLineClassifier;
    split_lines(text, strategy)
        .into_iter()
        .map(|line| {
            let mut node = classifier.classify(line.text);
            if line.trailing_break {
                node.push_break();
            }
            node
        })
        .collect()
}

/// Converts a full input string into a `Document`.
pub fn parse_document(text: &str, strategy: LineSplitting) -> Document {
    let nodes = classify_lines(text, strategy);
    let line_count = nodes.len();

    let mut builder = BlockBuilder::new();
    builder.extend(nodes);
    let blocks = builder.finish();

    debug!(
        "parsed {line_count} lines into {} top-level blocks ({strategy:?})",
        blocks.len()
    );
    Document { blocks }
}
