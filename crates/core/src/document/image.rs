use serde::{Deserialize, Serialize};

/// Image asset reference IDs follow the Sanity convention:
/// `image-{assetId}-{width}x{height}-{format}`
/// e.g. `image-a1b2c3-1200x800-jpg`.
const IMAGE_REF_PREFIX: &str = "image-";

/// Reference to an image asset held by the content lake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    pub asset: AssetRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// Slug object as stored on documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// Project/dataset pair that scopes every CDN asset URL.
#[derive(Debug, Clone)]
pub struct AssetSource {
    pub project_id: String,
    pub dataset: String,
}

/// Parsed pieces of an image asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedImageRef<'a> {
    asset_id: &'a str,
    dimensions: &'a str,
    format: &'a str,
}

fn parse_image_ref(reference: &str) -> Option<ParsedImageRef<'_>> {
    let rest = reference.strip_prefix(IMAGE_REF_PREFIX)?;
    // The asset id itself may not contain '-', so split from the right:
    // the last segment is the format, the one before it the dimensions.
    let (rest, format) = rest.rsplit_once('-')?;
    let (asset_id, dimensions) = rest.rsplit_once('-')?;
    if asset_id.is_empty() || format.is_empty() {
        return None;
    }
    let (w, h) = dimensions.split_once('x')?;
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !numeric(w) || !numeric(h) {
        return None;
    }
    Some(ParsedImageRef {
        asset_id,
        dimensions,
        format,
    })
}

impl ImageRef {
    /// Build the CDN URL for this image at the given width and quality.
    ///
    /// Returns `None` when the asset reference does not parse — the caller
    /// treats that as "no image", never as an error.
    pub fn url(&self, source: &AssetSource, width: u32, quality: u32) -> Option<String> {
        let parsed = parse_image_ref(&self.asset.reference)?;
        Some(format!(
            "https://cdn.sanity.io/images/{}/{}/{}-{}.{}?w={width}&q={quality}&auto=format&fit=max",
            source.project_id, source.dataset, parsed.asset_id, parsed.dimensions, parsed.format,
        ))
    }
}
