use serde::{Deserialize, Serialize};

/// One portable-text block: a paragraph-level node with inline spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub style: Option<String>,
    /// Present when the node is part of a list.
    #[serde(rename = "listItem", default)]
    pub list_item: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(rename = "markDefs", default)]
    pub mark_defs: Vec<MarkDef>,
}

/// Inline run of text with zero or more marks applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Annotation definition referenced by key from a span's marks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Block-level styles the renderer understands. Anything else falls back
/// to a plain paragraph so future editorial styles degrade gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Normal,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
}

impl BlockStyle {
    pub fn parse(style: Option<&str>) -> Self {
        match style {
            Some("h1") => BlockStyle::H1,
            Some("h2") => BlockStyle::H2,
            Some("h3") => BlockStyle::H3,
            Some("h4") => BlockStyle::H4,
            Some("blockquote") => BlockStyle::Blockquote,
            _ => BlockStyle::Normal,
        }
    }
}

/// List membership of a node, derived from its `listItem` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    pub fn parse(list_item: Option<&str>) -> Option<Self> {
        match list_item {
            Some("bullet") => Some(ListKind::Bullet),
            Some("number") => Some(ListKind::Number),
            _ => None,
        }
    }
}

impl RichTextNode {
    pub fn list_kind(&self) -> Option<ListKind> {
        ListKind::parse(self.list_item.as_deref())
    }

    /// Look up the annotation a span mark refers to.
    pub fn mark_def(&self, key: &str) -> Option<&MarkDef> {
        self.mark_defs.iter().find(|def| def.key == key)
    }
}
