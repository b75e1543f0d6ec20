use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use atelier_core::document::Project;

use crate::error::{ApiError, ApiResult};
use crate::lang::resolve_locale;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/project", get(project_by_slug))
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

/// List projects for the resolved locale. A content-lake failure here
/// degrades to an empty list: the projects page shows its empty state
/// instead of an error page.
async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    jar: CookieJar,
) -> Json<Vec<Project>> {
    let locale = resolve_locale(query.lang.as_deref(), &jar);
    match state.client().projects(locale).await {
        Ok(projects) => Json(projects),
        Err(err) => {
            tracing::error!(%locale, %err, "failed to fetch projects");
            Json(Vec::new())
        }
    }
}

async fn project_by_slug(
    State(state): State<AppState>,
    Query(query): Query<SlugQuery>,
    jar: CookieJar,
) -> ApiResult<Json<Project>> {
    let slug = query
        .slug
        .filter(|slug| !slug.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing slug".to_string()))?;
    let locale = resolve_locale(query.lang.as_deref(), &jar);
    let project = state
        .client()
        .project_by_slug(&slug, locale)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no project with slug '{slug}'")))?;
    Ok(Json(project))
}
