use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::image::{ImageRef, Slug};
use super::text::RichTextNode;

/// A news/blog article. Read-only, same ownership rules as `Project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub slug: Slug,
    pub published_at: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub featured_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "super::null_default")]
    pub content: Vec<RichTextNode>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_minimal() {
        let article: Article = serde_json::from_value(json!({
            "_id": "a1",
            "_createdAt": "2024-03-01T10:00:00Z",
            "_updatedAt": "2024-03-01T10:00:00Z",
            "title": "Studio opens",
            "slug": { "current": "studio-opens" },
            "publishedAt": "2024-03-01",
            "language": "en"
        }))
        .unwrap();
        assert_eq!(article.slug.current, "studio-opens");
        assert!(article.content.is_empty());
        assert_eq!(article.excerpt, None);
    }
}
