use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::block::ContentBlock;
use super::image::{ImageRef, Slug};

/// A portfolio project. Owned and versioned by the content lake; this
/// system only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub slug: Slug,
    pub date: String,
    pub location: String,
    pub client: String,
    pub typology: String,
    pub status: String,
    #[serde(default)]
    pub size: Option<String>,
    pub hero_image: ImageRef,
    #[serde(default)]
    pub icon_svg: Option<ImageRef>,
    #[serde(default, deserialize_with = "super::null_default")]
    pub content_blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub language: Option<String>,
}

impl Project {
    /// Published document id, with any draft prefix stripped.
    pub fn published_id(&self) -> &str {
        self.id.strip_prefix("drafts.").unwrap_or(&self.id)
    }
}
