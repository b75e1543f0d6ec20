//! The content-block renderer.
//!
//! [`render_block`] is a pure function from one [`ContentBlock`] to a
//! [`RenderNode`] tree. It never fails: blocks that cannot be rendered
//! (missing required data, unresolvable assets, unknown tags) come back as
//! [`RenderNode::Empty`] and the rest of the page is unaffected.
//!
//! [`ContentBlock`]: crate::document::ContentBlock

pub mod blocks;
pub mod html;
pub mod node;
pub mod portable_text;
pub mod video;

pub use blocks::{render_block, render_blocks, MAX_COLUMN_DEPTH};
pub use node::{Element, RenderNode};

use crate::document::AssetSource;

/// Fixed image targets used by the renderer. Widths/qualities match what
/// the design calls for at each slot.
pub const CONTENT_IMAGE_WIDTH: u32 = 800;
pub const GALLERY_IMAGE_WIDTH: u32 = 400;
pub const TEAM_IMAGE_WIDTH: u32 = 300;
pub const IMAGE_QUALITY: u32 = 90;

/// Parameters threaded through a render pass. Carries no mutable state;
/// the same value can serve every request.
#[derive(Debug, Clone)]
pub struct RenderParams {
    pub assets: AssetSource,
}

impl RenderParams {
    pub fn new(assets: AssetSource) -> Self {
        Self { assets }
    }
}
