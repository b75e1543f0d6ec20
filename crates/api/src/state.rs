use std::sync::Arc;

use atelier_core::document::AssetSource;
use atelier_core::render::RenderParams;
use atelier_sanity::SanityClient;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    client: SanityClient,
    config: AppConfig,
}

impl AppState {
    pub fn new(client: SanityClient, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { client, config }),
        }
    }

    pub fn client(&self) -> &SanityClient {
        &self.inner.client
    }

    /// Rendering parameters for the configured project/dataset.
    pub fn render_params(&self) -> RenderParams {
        RenderParams::new(AssetSource {
            project_id: self.inner.config.sanity_project_id.clone(),
            dataset: self.inner.config.sanity_dataset.clone(),
        })
    }
}
