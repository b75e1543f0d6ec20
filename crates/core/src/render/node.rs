/// Abstract output tree produced by the renderer. Tags mirror HTML but the
/// tree itself is markup-agnostic; serialization lives in [`super::html`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Element(Element),
    Text(String),
    Fragment(Vec<RenderNode>),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<RenderNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: RenderNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(RenderNode::Text(content.into()))
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        RenderNode::Element(element)
    }
}

impl RenderNode {
    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text(content.into())
    }

    /// True when the node contributes nothing to the output.
    pub fn is_empty(&self) -> bool {
        match self {
            RenderNode::Empty => true,
            RenderNode::Text(text) => text.is_empty(),
            RenderNode::Fragment(children) => children.iter().all(RenderNode::is_empty),
            RenderNode::Element(_) => false,
        }
    }

    /// Find the first element with the given tag, depth-first. Mostly a
    /// test convenience.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        match self {
            RenderNode::Element(element) => {
                if element.tag == tag {
                    return Some(element);
                }
                element.children.iter().find_map(|child| child.find(tag))
            }
            RenderNode::Fragment(children) => children.iter().find_map(|child| child.find(tag)),
            _ => None,
        }
    }

    /// Collect every element with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        match self {
            RenderNode::Element(element) => {
                if element.tag == tag {
                    out.push(element);
                }
                for child in &element.children {
                    child.find_all(tag, out);
                }
            }
            RenderNode::Fragment(children) => {
                for child in children {
                    child.find_all(tag, out);
                }
            }
            _ => {}
        }
    }
}
