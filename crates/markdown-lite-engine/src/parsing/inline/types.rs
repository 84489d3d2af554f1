use crate::parsing::span::Span;

use super::kinds::Emphasis;

/// One substitution pass of the inline rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    Bold,
    Italic,
    Link,
}

impl InlinePass {
    /// Passes run in this order; each sees the output of the previous one.
    pub const ORDER: [InlinePass; 3] = [InlinePass::Bold, InlinePass::Italic, InlinePass::Link];
}

/// A node found by a single pass, with byte spans into that pass' input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text the pass leaves untouched.
    Text(Span),
    /// `*inner*` or `_inner_`.
    Emphasis {
        kind: Emphasis,
        /// Full span including both markers.
        full: Span,
        /// Text between the markers.
        inner: Span,
    },
    /// `(label)[url]`.
    Link { full: Span, label: Span, url: Span },
}

impl InlineNode {
    /// Extracts the full span from any variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Emphasis { full, .. } => *full,
            InlineNode::Link { full, .. } => *full,
        }
    }
}
