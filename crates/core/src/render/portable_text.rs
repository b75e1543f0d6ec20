use crate::document::text::{BlockStyle, ListKind, RichTextNode, Span};

use super::node::{Element, RenderNode};

/// Render a portable-text node sequence. Consecutive nodes belonging to
/// the same list kind are grouped into a single `ul`/`ol`; everything else
/// maps one node to one block element.
pub fn render(nodes: &[RichTextNode]) -> RenderNode {
    if nodes.is_empty() {
        return RenderNode::Empty;
    }

    let mut out = Vec::new();
    let mut i = 0;
    while i < nodes.len() {
        match nodes[i].list_kind() {
            Some(kind) => {
                let mut items = Vec::new();
                while i < nodes.len() && nodes[i].list_kind() == Some(kind) {
                    items.push(Element::new("li").children(render_spans(&nodes[i])).into());
                    i += 1;
                }
                let tag = match kind {
                    ListKind::Bullet => "ul",
                    ListKind::Number => "ol",
                };
                out.push(Element::new(tag).children(items).into());
            }
            None => {
                out.push(render_node(&nodes[i]));
                i += 1;
            }
        }
    }
    RenderNode::Fragment(out)
}

fn render_node(node: &RichTextNode) -> RenderNode {
    let tag = match BlockStyle::parse(node.style.as_deref()) {
        BlockStyle::Normal => "p",
        BlockStyle::H1 => "h1",
        BlockStyle::H2 => "h2",
        BlockStyle::H3 => "h3",
        BlockStyle::H4 => "h4",
        BlockStyle::Blockquote => "blockquote",
    };
    Element::new(tag).children(render_spans(node)).into()
}

fn render_spans(node: &RichTextNode) -> Vec<RenderNode> {
    node.children
        .iter()
        .map(|span| render_span(node, span))
        .collect()
}

fn render_span(node: &RichTextNode, span: &Span) -> RenderNode {
    let mut rendered = RenderNode::text(span.text.clone());
    for mark in &span.marks {
        rendered = apply_mark(node, mark, rendered);
    }
    rendered
}

fn apply_mark(node: &RichTextNode, mark: &str, inner: RenderNode) -> RenderNode {
    match mark {
        "strong" => Element::new("strong").child(inner).into(),
        "em" => Element::new("em").child(inner).into(),
        key => match node.mark_def(key) {
            Some(def) if def.kind == "link" => {
                let href = def.href.clone().unwrap_or_else(|| "#".to_string());
                Element::new("a")
                    .attr("href", href)
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .child(inner)
                    .into()
            }
            // Unrecognized annotation: keep the text, drop the mark.
            _ => inner,
        },
    }
}
