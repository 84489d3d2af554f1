//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line independently becomes
//!    one `BlockNode` with its marker stripped and inline markup rewritten.
//!
//! 2. **List Grouping** (`builder`): a `BlockBuilder` walks the nodes once and
//!    merges runs of adjacent list items into `ListGroup`s.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`, `BlockNode`, `ListGroup`, `DocumentBlock`
//! - **`kinds`**: block types owning their markers (Heading, ListItem, ThematicBreak, Table, Image)
//! - **`classify`**: `MarkdownLineClassifier` produces a `BlockNode` per line
//! - **`builder`**: `BlockBuilder` for list grouping
//!
//! ## Key Invariants
//!
//! - One line maps to exactly one node; classification never fails
//! - No nesting: list groups only ever contain list items

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{MarkdownLineClassifier, classify_line};
pub use types::{
    BlockKind, BlockNode, DocumentBlock, HeadingLevel, ImageSpec, ListGroup, TableSpec,
};
