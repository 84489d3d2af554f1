pub mod elements;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use elements::{Attribute, Element, ElementContent, Tag, build_elements};
pub use options::{OptionsError, StyleOptions};
pub use parsing::{
    Document,
    blocks::{BlockKind, BlockNode, DocumentBlock, ListGroup, classify_line},
    inline::rewrite_inline,
    lines::LineSplitting,
    parse_document,
};
pub use render::render_html;

/// Converts markdown-lite text into element trees.
///
/// Holds only read-only configuration, so one converter can serve any number
/// of independent `convert` calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkdownConverter {
    style: StyleOptions,
    line_splitting: LineSplitting,
}

impl MarkdownConverter {
    /// Builds a converter, rejecting style values that cannot be emitted safely.
    pub fn new(style: StyleOptions) -> Result<Self, OptionsError> {
        style.validate()?;
        Ok(Self {
            style,
            line_splitting: LineSplitting::default(),
        })
    }

    pub fn with_line_splitting(mut self, line_splitting: LineSplitting) -> Self {
        self.line_splitting = line_splitting;
        self
    }

    pub fn style(&self) -> &StyleOptions {
        &self.style
    }

    pub fn line_splitting(&self) -> LineSplitting {
        self.line_splitting
    }

    /// Parses `text` into top-level blocks with list items grouped.
    pub fn convert(&self, text: &str) -> Document {
        parse_document(text, self.line_splitting)
    }

    /// Parses `text` and builds the styled element tree.
    pub fn elements(&self, text: &str) -> Vec<Element> {
        build_elements(&self.convert(text), &self.style)
    }

    /// Parses `text` and renders it as an HTML fragment.
    pub fn to_html(&self, text: &str) -> String {
        render_html(&self.elements(text))
    }
}
