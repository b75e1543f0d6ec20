use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use atelier_core::document::Article;

use crate::error::{ApiError, ApiResult};
use crate::lang::resolve_locale;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/article", get(article_by_slug))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SlugQuery {
    slug: Option<String>,
    lang: Option<String>,
}

/// List articles for the resolved locale; empty list on upstream failure,
/// same policy as the projects list.
async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    jar: CookieJar,
) -> Json<Vec<Article>> {
    let locale = resolve_locale(query.lang.as_deref(), &jar);
    match state.client().articles(locale).await {
        Ok(articles) => Json(articles),
        Err(err) => {
            tracing::error!(%locale, %err, "failed to fetch articles");
            Json(Vec::new())
        }
    }
}

async fn article_by_slug(
    State(state): State<AppState>,
    Query(query): Query<SlugQuery>,
    jar: CookieJar,
) -> ApiResult<Json<Article>> {
    let slug = query
        .slug
        .filter(|slug| !slug.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing slug".to_string()))?;
    let locale = resolve_locale(query.lang.as_deref(), &jar);
    let article = state
        .client()
        .article_by_slug(&slug, locale)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no article with slug '{slug}'")))?;
    Ok(Json(article))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::routes::tests::{test_router, test_router_with};

    #[tokio::test]
    async fn article_without_slug_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/article?lang=en")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["type"], "badRequest");
    }

    #[tokio::test]
    async fn empty_slug_counts_as_missing() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/article?slug=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn known_slug_returns_article_in_requested_language() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/query/production"))
            .and(query_param("$lang", "\"en\""))
            .and(query_param("$slug", "\"studio-opens\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {
                    "_id": "a1",
                    "_createdAt": "2024-03-01T10:00:00Z",
                    "_updatedAt": "2024-03-01T10:00:00Z",
                    "title": "Studio opens",
                    "slug": {"current": "studio-opens"},
                    "publishedAt": "2024-03-01",
                    "language": "en"
                }
            })))
            .mount(&server)
            .await;

        let response = test_router_with(Some(server.uri()), None)
            .oneshot(
                Request::builder()
                    .uri("/api/article?slug=studio-opens&lang=en")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["language"], "en");
        assert_eq!(json["slug"]["current"], "studio-opens");
    }
}
