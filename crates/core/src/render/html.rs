use std::fmt::Write;

use super::node::{Element, RenderNode};

/// Elements that take no closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link"];

/// Serialize a render tree to an HTML string. Text and attribute values
/// are escaped; tags and attribute names are static strings chosen by the
/// renderer and written as-is.
pub fn to_html(node: &RenderNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Empty => {}
        RenderNode::Text(text) => escape_into(out, text),
        RenderNode::Fragment(children) => {
            for child in children {
                write_node(out, child);
            }
        }
        RenderNode::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    let _ = write!(out, "<{}", element.tag);
    for (name, value) in &element.attrs {
        let _ = write!(out, " {name}=\"");
        escape_into(out, value);
        out.push('"');
    }
    if VOID_TAGS.contains(&element.tag) {
        out.push_str(" />");
        return;
    }
    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", element.tag);
}

fn escape_into(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let node: RenderNode = Element::new("p")
            .attr("class", "lead")
            .child(Element::new("em").text("hi").into())
            .into();
        assert_eq!(to_html(&node), "<p class=\"lead\"><em>hi</em></p>");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node: RenderNode = Element::new("a")
            .attr("href", "https://x.test/?a=1&b=\"2\"")
            .text("<click>")
            .into();
        assert_eq!(
            to_html(&node),
            "<a href=\"https://x.test/?a=1&amp;b=&quot;2&quot;\">&lt;click&gt;</a>"
        );
    }

    #[test]
    fn void_tags_self_close() {
        let node: RenderNode = Element::new("img").attr("src", "u").into();
        assert_eq!(to_html(&node), "<img src=\"u\" />");
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(to_html(&RenderNode::Empty), "");
        assert_eq!(to_html(&RenderNode::Fragment(vec![])), "");
    }
}
