//! # Element Trees
//!
//! A renderer-neutral description of the output: tag, attributes and
//! content. Any host that can create tags, set attributes and append
//! children can materialize it; `render::html` is one such host.

use crate::{
    options::StyleOptions,
    parsing::{
        Document,
        blocks::{BlockKind, BlockNode, DocumentBlock, HeadingLevel, ImageSpec, TableSpec},
    },
};

/// Class given to every image.
pub const IMAGE_CLASS: &str = "img-fluid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Ul,
    Li,
    Hr,
    Br,
    Img,
    Table,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::P => "p",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Hr => "hr",
            Tag::Br => "br",
            Tag::Img => "img",
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
        }
    }

    /// Void elements never have content or a closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Hr | Tag::Br | Tag::Img)
    }

    fn heading(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => Tag::H1,
            HeadingLevel::H2 => Tag::H2,
            HeadingLevel::H3 => Tag::H3,
            HeadingLevel::H4 => Tag::H4,
            HeadingLevel::H5 => Tag::H5,
            HeadingLevel::H6 => Tag::H6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    /// Unescaped value; escaping is the renderer's job.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementContent {
    Empty,
    /// Trusted markup built by the inline rewriter from escaped text.
    Markup(String),
    Children(Vec<Element>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attributes: Vec<Attribute>,
    pub content: ElementContent,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: vec![],
            content: ElementContent::Empty,
        }
    }

    /// Adds an attribute unless `value` is empty.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.attributes.push(Attribute { name, value });
        }
        self
    }

    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.content = ElementContent::Markup(markup.into());
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = ElementContent::Children(children);
        self
    }

    /// Looks up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// Builds the element tree for a parsed document.
pub fn build_elements(doc: &Document, style: &StyleOptions) -> Vec<Element> {
    doc.blocks
        .iter()
        .map(|block| match block {
            DocumentBlock::Block(node) => block_element(node, style),
            DocumentBlock::List(group) => Element::new(Tag::Ul).children(
                group
                    .items
                    .iter()
                    .map(|item| block_element(item, style))
                    .collect(),
            ),
        })
        .collect()
}

fn block_element(node: &BlockNode, style: &StyleOptions) -> Element {
    match &node.kind {
        BlockKind::Heading(level) => text_element(Tag::heading(*level), node, style),
        BlockKind::ListItem => text_element(Tag::Li, node, style),
        BlockKind::Paragraph => text_element(Tag::P, node, style),
        BlockKind::ThematicBreak => Element::new(Tag::Hr),
        BlockKind::LineBreak => Element::new(Tag::Br),
        BlockKind::Table(table) => table_element(table, style),
        BlockKind::Image(image) => image_element(image, style),
    }
}

fn text_element(tag: Tag, node: &BlockNode, style: &StyleOptions) -> Element {
    Element::new(tag)
        .attr("style", css(&[], style))
        .markup(node.content.clone())
}

fn table_element(table: &TableSpec, style: &StyleOptions) -> Element {
    let thead = Element::new(Tag::Thead).children(vec![table_row(table.header(), Tag::Th)]);
    let tbody = Element::new(Tag::Tbody).children(
        table
            .body()
            .iter()
            .map(|cells| table_row(cells, Tag::Td))
            .collect(),
    );

    Element::new(Tag::Table)
        .attr("class", style.table_class.clone())
        .attr("style", css(&[style.table_style.as_str()], style))
        .children(vec![thead, tbody])
}

fn table_row(cells: &[String], cell_tag: Tag) -> Element {
    Element::new(Tag::Tr).children(
        cells
            .iter()
            .map(|cell| {
                let el = Element::new(cell_tag);
                let el = match cell_tag {
                    Tag::Th => el.attr("scope", "col"),
                    _ => el,
                };
                el.markup(cell.clone())
            })
            .collect(),
    )
}

fn image_element(image: &ImageSpec, style: &StyleOptions) -> Element {
    let mut el = Element::new(Tag::Img)
        .attr("class", IMAGE_CLASS)
        .attr("src", image.src.clone());
    // Kept even when empty: an empty alt marks the image decorative.
    el.attributes.push(Attribute {
        name: "alt",
        value: image.alt.clone(),
    });
    el.attr("style", style.image_style.clone())
}

/// Joins leading declarations with the configured color and font family.
fn css(leading: &[&str], style: &StyleOptions) -> String {
    leading
        .iter()
        .map(|d| d.trim().trim_end_matches(';').trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .chain([
            format!("color: {}", style.color),
            format!("font-family: {}", style.font_family),
        ])
        .collect::<Vec<_>>()
        .join("; ")
}
