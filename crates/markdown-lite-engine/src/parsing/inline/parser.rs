use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Link},
    types::{InlineNode, InlinePass},
};

/// Rewrites inline markdown into markup: bold, then italic, then links.
///
/// Each pass is a single left-to-right scan. Markup produced by a pass is
/// never re-scanned by that pass, but later passes do see it, so `_` inside a
/// link URL is still read as italic.
pub fn rewrite_inline(text: &str) -> String {
    InlinePass::ORDER
        .iter()
        .fold(text.to_string(), |acc, pass| {
            let nodes = parse_pass(&acc, *pass);
            render_nodes(&acc, &nodes)
        })
}

/// Scans `s` for one kind of inline construct.
///
/// # Returns
/// Nodes covering the entire input in order. Text between constructs is
/// emitted as `InlineNode::Text`.
pub fn parse_pass(s: &str, pass: InlinePass) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        let sp = Span::new(start, end);
        if !sp.is_empty() {
            out.push(InlineNode::Text(sp));
        }
    }

    while !cur.eof() {
        let found = match pass {
            InlinePass::Bold => try_parse_emphasis(&mut cur, Emphasis::BOLD),
            InlinePass::Italic => try_parse_emphasis(&mut cur, Emphasis::ITALIC),
            InlinePass::Link => try_parse_link(&mut cur),
        };
        if let Some(node) = found {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Writes the markup for `nodes`, which must come from `parse_pass(s, _)`.
pub fn render_nodes(s: &str, nodes: &[InlineNode]) -> String {
    let mut out = String::with_capacity(s.len());
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push_str(sp.slice(s)),
            InlineNode::Emphasis { kind, inner, .. } => kind.wrap(inner.slice(s), &mut out),
            InlineNode::Link { label, url, .. } => {
                Link::write_anchor(label.slice(s), url.slice(s), &mut out)
            }
        }
    }
    out
}

/// Pairs the marker under the cursor with the nearest following one.
///
/// On failure the cursor is restored so the caller can step past the
/// unmatched marker.
fn try_parse_emphasis(cur: &mut Cursor<'_>, kind: Emphasis) -> Option<InlineNode> {
    if cur.peek() != Some(kind.marker) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let inner_start = cur.pos();

    if !cur.seek(kind.marker) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump();

    Some(InlineNode::Emphasis {
        kind,
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Parses `(label)[url]` at the cursor.
///
/// The label is the shortest text ending in a run of `)` that is directly
/// followed by `[`; it may itself contain parentheses. The url runs to the
/// first `]`.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let label_start = cur.pos();

    loop {
        if !cur.seek(Link::LABEL_CLOSE) {
            *cur = saved;
            return None;
        }
        let label_end = cur.pos();
        cur.skip_run(Link::LABEL_CLOSE);
        if cur.peek() != Some(Link::URL_OPEN) {
            continue;
        }

        cur.bump();
        let url_start = cur.pos();
        if !cur.seek(Link::URL_CLOSE) {
            // No `]` on the rest of the line, so no later `)[` can close either.
            *cur = saved;
            return None;
        }
        let url_end = cur.pos();
        cur.bump();

        return Some(InlineNode::Link {
            full: Span::new(start, cur.pos()),
            label: Span::new(label_start, label_end),
            url: Span::new(url_start, url_end),
        });
    }
}
