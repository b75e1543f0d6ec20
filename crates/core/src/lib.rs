//! Core document model and content-block rendering for the studio site.
//!
//! Everything in this crate is pure: documents come in as JSON from the
//! content lake, the renderer turns content blocks into a [`render::RenderNode`]
//! tree, and no I/O happens anywhere along the way.

pub mod document;
pub mod locale;
pub mod render;
