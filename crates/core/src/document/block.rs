use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image::ImageRef;
use super::text::RichTextNode;

/// One tagged unit of a project's body content.
///
/// Deserialization is deliberately forgiving: blocks arrive inside a
/// `contentBlocks` array and a single bad block must never sink the whole
/// document. Unrecognized `_type` tags and variant payloads that fail to
/// decode both collapse to [`ContentBlock::Unknown`], which renders to
/// nothing downstream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum ContentBlock {
    TextBlock(TextBlock),
    ImageBlock(ImageBlock),
    QuoteBlock(QuoteBlock),
    GalleryBlock(GalleryBlock),
    MapBlock(MapBlock),
    VideoBlock(VideoBlock),
    TeamBlock(TeamBlock),
    TwoColumnBlock(TwoColumnBlock),
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub content: Vec<RichTextNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub ratio: Option<f64>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub quote_text: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub images: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Coordinates are trusted as-is from the editor; range validation is the
/// studio schema's job, not this layer's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<ImageRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub left_column: Vec<ContentBlock>,
    #[serde(default)]
    pub right_column: Vec<ContentBlock>,
}

impl ContentBlock {
    /// Decode a block from its JSON value, degrading to `Unknown` on any
    /// unrecognized tag or malformed payload.
    pub fn from_value(value: Value) -> Self {
        let tag = value
            .get("_type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let decoded = match tag.as_str() {
            "textBlock" => serde_json::from_value(value).map(ContentBlock::TextBlock),
            "imageBlock" => serde_json::from_value(value).map(ContentBlock::ImageBlock),
            "quoteBlock" => serde_json::from_value(value).map(ContentBlock::QuoteBlock),
            "galleryBlock" => serde_json::from_value(value).map(ContentBlock::GalleryBlock),
            "mapBlock" => serde_json::from_value(value).map(ContentBlock::MapBlock),
            "videoBlock" => serde_json::from_value(value).map(ContentBlock::VideoBlock),
            "teamBlock" => serde_json::from_value(value).map(ContentBlock::TeamBlock),
            "twoColumnBlock" => serde_json::from_value(value).map(ContentBlock::TwoColumnBlock),
            other => {
                tracing::debug!(block_type = other, "skipping unrecognized content block");
                return ContentBlock::Unknown;
            }
        };
        decoded.unwrap_or_else(|err| {
            tracing::warn!(block_type = %tag, %err, "malformed content block, skipping");
            ContentBlock::Unknown
        })
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(ContentBlock::from_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_quote_block() {
        let block: ContentBlock = serde_json::from_value(json!({
            "_type": "quoteBlock",
            "_key": "q1",
            "quoteText": "Less is more.",
            "authorName": "Mies"
        }))
        .unwrap();
        match block {
            ContentBlock::QuoteBlock(q) => {
                assert_eq!(q.quote_text, "Less is more.");
                assert_eq!(q.author_name.as_deref(), Some("Mies"));
                assert_eq!(q.author_title, None);
            }
            other => panic!("expected quote block, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tag_degrades() {
        let block: ContentBlock = serde_json::from_value(json!({
            "_type": "hologramBlock",
            "_key": "h1"
        }))
        .unwrap();
        assert!(matches!(block, ContentBlock::Unknown));
    }

    #[test]
    fn malformed_payload_degrades() {
        // mapBlock without coordinates fails its variant decode but must
        // not fail the surrounding array.
        let blocks: Vec<ContentBlock> = serde_json::from_value(json!([
            { "_type": "mapBlock", "_key": "m1", "title": "Site" },
            { "_type": "quoteBlock", "_key": "q1", "quoteText": "ok" }
        ]))
        .unwrap();
        assert!(matches!(blocks[0], ContentBlock::Unknown));
        assert!(matches!(blocks[1], ContentBlock::QuoteBlock(_)));
    }

    #[test]
    fn decodes_nested_columns() {
        let block: ContentBlock = serde_json::from_value(json!({
            "_type": "twoColumnBlock",
            "_key": "tc1",
            "leftColumn": [
                { "_type": "quoteBlock", "_key": "q1", "quoteText": "left" }
            ],
            "rightColumn": []
        }))
        .unwrap();
        match block {
            ContentBlock::TwoColumnBlock(tc) => {
                assert_eq!(tc.left_column.len(), 1);
                assert!(tc.right_column.is_empty());
            }
            other => panic!("expected two-column block, got {other:?}"),
        }
    }
}
