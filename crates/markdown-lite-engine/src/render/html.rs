use crate::elements::{Element, ElementContent};

/// Serializes element trees to an HTML fragment.
///
/// Attribute values are escaped. `Markup` content is written verbatim: it
/// only ever comes from the classifier, which escaped `<` and `>` before
/// generating any tags.
pub fn render_html(elements: &[Element]) -> String {
    let mut out = String::new();
    for el in elements {
        write_element(el, &mut out);
    }
    out
}

fn write_element(el: &Element, out: &mut String) {
    let name = el.tag.name();
    out.push('<');
    out.push_str(name);
    for attr in &el.attributes {
        out.push(' ');
        out.push_str(attr.name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
        out.push('"');
    }
    out.push('>');

    if el.tag.is_void() {
        return;
    }

    match &el.content {
        ElementContent::Empty => {}
        ElementContent::Markup(markup) => out.push_str(markup),
        ElementContent::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Tag;

    #[test]
    fn void_elements_have_no_close_tag() {
        let html = render_html(&[Element::new(Tag::Hr), Element::new(Tag::Br)]);
        assert_eq!(html, "<hr><br>");
    }

    #[test]
    fn attributes_are_escaped() {
        let el = Element::new(Tag::Img).attr("alt", "say \"hi\"");
        assert_eq!(
            render_html(&[el]),
            "<img alt=\"say &quot;hi&quot;\">"
        );
    }

    #[test]
    fn markup_is_written_verbatim() {
        let el = Element::new(Tag::P).markup("<strong>x</strong>");
        assert_eq!(render_html(&[el]), "<p><strong>x</strong></p>");
    }

    #[test]
    fn nested_children() {
        let el = Element::new(Tag::Ul).children(vec![
            Element::new(Tag::Li).markup("a"),
            Element::new(Tag::Li).markup("b"),
        ]);
        assert_eq!(render_html(&[el]), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn empty_container() {
        assert_eq!(render_html(&[Element::new(Tag::Tbody)]), "<tbody></tbody>");
    }
}
