pub mod articles;
pub mod health;
pub mod leads;
pub mod locale;
pub mod pages;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(projects::routes())
        .merge(articles::routes())
        .merge(leads::routes())
        .merge(locale::routes())
        .merge(pages::routes())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod tests {
    use atelier_sanity::SanityClient;
    use axum::Router;

    use crate::config::AppConfig;
    use crate::state::AppState;

    /// Router over a state whose client points at a placeholder project.
    /// For tests of paths that return before any network call.
    pub(crate) fn test_router() -> Router {
        test_router_with(None, None)
    }

    /// Router whose client is aimed at a mock content lake.
    pub(crate) fn test_router_with(base_url: Option<String>, token: Option<String>) -> Router {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            sanity_project_id: "testproj".to_string(),
            sanity_dataset: "production".to_string(),
            sanity_api_version: "2024-01-01".to_string(),
            sanity_write_token: token,
            sanity_use_cdn: true,
            sanity_base_url: base_url,
            log_level: "info".to_string(),
        };
        let client = SanityClient::new(config.sanity()).unwrap();
        super::build_router(AppState::new(client, config))
    }
}
