use std::env;

use atelier_sanity::SanityConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Content lake project id.
    pub sanity_project_id: String,
    /// Content lake dataset.
    pub sanity_dataset: String,
    /// Content lake API version date.
    pub sanity_api_version: String,
    /// Contributor token for lead-submission writes. Optional: without it
    /// the read side still works and writes fail with a 500.
    pub sanity_write_token: Option<String>,
    /// Serve reads from the CDN edge.
    pub sanity_use_cdn: bool,
    /// Optional endpoint base override (local stand-in for the content
    /// lake).
    pub sanity_base_url: Option<String>,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid u16"),
            sanity_project_id: env::var("SANITY_PROJECT_ID")?,
            sanity_dataset: env::var("SANITY_DATASET").unwrap_or_else(|_| "production".to_string()),
            sanity_api_version: env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| "2024-01-01".to_string()),
            sanity_write_token: env::var("SANITY_WRITE_TOKEN").ok(),
            sanity_use_cdn: env::var("SANITY_USE_CDN")
                .map(|value| value != "false")
                .unwrap_or(true),
            sanity_base_url: env::var("SANITY_BASE_URL").ok(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection settings for the content lake client.
    pub fn sanity(&self) -> SanityConfig {
        SanityConfig {
            project_id: self.sanity_project_id.clone(),
            dataset: self.sanity_dataset.clone(),
            api_version: self.sanity_api_version.clone(),
            token: self.sanity_write_token.clone(),
            use_cdn: self.sanity_use_cdn,
            base_url: self.sanity_base_url.clone(),
        }
    }
}
