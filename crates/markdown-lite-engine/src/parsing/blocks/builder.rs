use super::types::{BlockKind, BlockNode, DocumentBlock, ListGroup};

/// Groups adjacent list items while passing every other node through.
///
/// Single left-to-right pass: an item joins the list only when the last
/// emitted block is that list, so items separated by anything else (an empty
/// line included) start a new group.
pub struct BlockBuilder {
    out: Vec<DocumentBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    pub fn push(&mut self, node: BlockNode) {
        if node.kind != BlockKind::ListItem {
            self.out.push(DocumentBlock::Block(node));
            return;
        }

        match self.out.last_mut() {
            Some(DocumentBlock::List(group)) => group.items.push(node),
            _ => self.out.push(DocumentBlock::List(ListGroup { items: vec![node] })),
        }
    }

    pub fn finish(self) -> Vec<DocumentBlock> {
        self.out
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<BlockNode> for BlockBuilder {
    fn extend<I: IntoIterator<Item = BlockNode>>(&mut self, iter: I) {
        for node in iter {
            self.push(node);
        }
    }
}
