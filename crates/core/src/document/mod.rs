//! Typed shapes of the Sanity documents this site reads and writes.

pub mod article;
pub mod block;
pub mod image;
pub mod lead;
pub mod project;
pub mod text;

use serde::Deserialize;

/// Projected fields come back as explicit `null` when a document lacks
/// them, which plain `#[serde(default)]` does not cover.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

pub use article::Article;
pub use block::ContentBlock;
pub use image::{AssetSource, ImageRef, Slug};
pub use lead::{ContactSubmission, ConsultationSubmission, LeadError};
pub use project::Project;
