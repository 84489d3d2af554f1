/// Heading level, `#` through `######`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Maps a marker run length to a level; anything outside 1..=6 is `None`.
    pub fn from_marker_count(n: usize) -> Option<Self> {
        match n {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8 + 1
    }
}

/// Rows of a `!@table@[...]` line. The first row is the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Cell text, already escaped. Never inline-rewritten.
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }
}

/// Source and alt text of a `!@img@(src)[alt]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub src: String,
    pub alt: String,
}

/// The block construct a single line represents.
///
/// Exactly one kind applies to any line; see `MarkdownLineClassifier` for the
/// order in which they are tested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading(HeadingLevel),
    ListItem,
    /// `---`
    ThematicBreak,
    Table(TableSpec),
    Image(ImageSpec),
    /// An empty line.
    LineBreak,
    /// Anything no other rule claims.
    Paragraph,
}

impl BlockKind {
    /// Whether the node carries rewritten inline markup in `content`.
    pub fn has_inline_content(&self) -> bool {
        matches!(
            self,
            BlockKind::Heading(_) | BlockKind::ListItem | BlockKind::Paragraph
        )
    }
}

/// The parse result for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Rewritten markup. Empty for kinds without inline content.
    pub content: String,
}

impl BlockNode {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// A node with no inline content (rule, table, image, line break).
    pub fn void(kind: BlockKind) -> Self {
        Self::new(kind, String::new())
    }

    /// Appends a visible line break to inline content; no-op for other kinds.
    pub fn push_break(&mut self) {
        if self.kind.has_inline_content() {
            self.content.push_str("<br>");
        }
    }
}

/// Consecutive list items merged into one list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListGroup {
    /// Nodes of kind `BlockKind::ListItem`, in input order.
    pub items: Vec<BlockNode>,
}

/// A top-level entry of a converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBlock {
    Block(BlockNode),
    List(ListGroup),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_are_one_based() {
        assert_eq!(HeadingLevel::H1.level(), 1);
        assert_eq!(HeadingLevel::H6.level(), 6);
    }

    #[test]
    fn marker_count_out_of_range() {
        assert_eq!(HeadingLevel::from_marker_count(0), None);
        assert_eq!(HeadingLevel::from_marker_count(7), None);
    }

    #[test]
    fn break_only_appended_to_inline_kinds() {
        let mut p = BlockNode::new(BlockKind::Paragraph, "a");
        p.push_break();
        assert_eq!(p.content, "a<br>");

        let mut hr = BlockNode::void(BlockKind::ThematicBreak);
        hr.push_break();
        assert_eq!(hr.content, "");
    }

    #[test]
    fn empty_table_spec_has_no_header() {
        let t = TableSpec { rows: vec![] };
        assert!(t.header().is_empty());
        assert!(t.body().is_empty());
    }
}
