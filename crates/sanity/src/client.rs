use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use atelier_core::document::{Article, Project};
use atelier_core::locale::Locale;

use crate::error::SanityError;
use crate::mutation::{MutationRequest, MutationResponse};
use crate::queries;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for one project/dataset pair.
#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Contributor token; needed only for lead-submission writes.
    pub token: Option<String>,
    /// Serve reads from the CDN edge. Mutations always go to the live API.
    pub use_cdn: bool,
    /// Override of the `https://{project}.{host}.sanity.io/v{version}`
    /// endpoint base, for pointing the client at a local stand-in.
    pub base_url: Option<String>,
}

/// Thin typed client over the content lake's HTTP API. Each call is one
/// independent request; there is no retry or batching layer.
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    config: SanityConfig,
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Result<Self, SanityError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    fn endpoint_base(&self, use_cdn: bool) -> String {
        if let Some(base) = &self.config.base_url {
            return base.trim_end_matches('/').to_string();
        }
        let host = if use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{host}.sanity.io/v{}",
            self.config.project_id, self.config.api_version
        )
    }

    pub(crate) fn query_url(&self) -> String {
        format!(
            "{}/data/query/{}",
            self.endpoint_base(self.config.use_cdn),
            self.config.dataset
        )
    }

    pub(crate) fn mutate_url(&self) -> String {
        format!(
            "{}/data/mutate/{}",
            self.endpoint_base(false),
            self.config.dataset
        )
    }

    /// Run a GROQ query. Param values are JSON-encoded per the API contract
    /// (strings arrive quoted on the query string).
    pub async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, Value)],
    ) -> Result<T, SanityError> {
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }

        let mut request = self.http.get(self.query_url()).query(&pairs);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SanityError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let body: QueryResponse<T> = serde_json::from_slice(&response.bytes().await?)?;
        Ok(body.result)
    }

    /// Create one document. Requires the write token; the content lake
    /// assigns the id and revision.
    pub async fn create_document(&self, document: Value) -> Result<String, SanityError> {
        let token = self.config.token.as_ref().ok_or(SanityError::MissingToken)?;

        let response = self
            .http
            .post(self.mutate_url())
            .query(&[("returnIds", "true")])
            .bearer_auth(token)
            .json(&MutationRequest::create(document))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SanityError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let body: MutationResponse = serde_json::from_slice(&response.bytes().await?)?;
        tracing::debug!(transaction_id = %body.transaction_id, "document created");
        body.results
            .into_iter()
            .next()
            .map(|result| result.id)
            .ok_or(SanityError::EmptyMutationResult)
    }

    pub async fn projects(&self, locale: Locale) -> Result<Vec<Project>, SanityError> {
        self.query(queries::PROJECTS, &[("lang", locale.as_str().into())])
            .await
    }

    pub async fn project_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Project>, SanityError> {
        self.query(
            queries::PROJECT_BY_SLUG,
            &[("lang", locale.as_str().into()), ("slug", slug.into())],
        )
        .await
    }

    pub async fn articles(&self, locale: Locale) -> Result<Vec<Article>, SanityError> {
        self.query(queries::ARTICLES, &[("lang", locale.as_str().into())])
            .await
    }

    pub async fn article_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Article>, SanityError> {
        self.query(
            queries::ARTICLE_BY_SLUG,
            &[("lang", locale.as_str().into()), ("slug", slug.into())],
        )
        .await
    }

    /// Round-trip probe used by the health endpoint.
    pub async fn ping(&self) -> Result<(), SanityError> {
        let _: Value = self.query(queries::PING, &[]).await?;
        Ok(())
    }
}
