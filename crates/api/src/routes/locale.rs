use axum::{
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use atelier_core::locale::Locale;

use crate::error::{ApiError, ApiResult};
use crate::lang::locale_cookie;
use crate::state::AppState;

/// Locale preference persistence. The cookie is read by [`crate::lang`]
/// on every content fetch.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/locale", post(set_locale))
}

#[derive(Debug, Deserialize)]
struct SetLocale {
    locale: String,
}

async fn set_locale(Json(body): Json<SetLocale>) -> ApiResult<impl IntoResponse> {
    let locale = Locale::parse(&body.locale)
        .ok_or_else(|| ApiError::BadRequest(format!("unsupported locale '{}'", body.locale)))?;
    Ok((
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, locale_cookie(locale))]),
        Json(json!({ "locale": locale })),
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::tests::test_router;

    fn post_locale(locale: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/locale")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!("{{\"locale\":\"{locale}\"}}")))
            .unwrap()
    }

    #[tokio::test]
    async fn sets_year_long_cookie() {
        let response = test_router().oneshot(post_locale("az")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("locale=az;"));
        assert!(cookie.contains("Max-Age=31536000"));
    }

    #[tokio::test]
    async fn rejects_unsupported_locale() {
        let response = test_router().oneshot(post_locale("de")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
