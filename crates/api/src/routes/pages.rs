use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use atelier_core::document::Project;
use atelier_core::locale::Locale;
use atelier_core::render::html::to_html;
use atelier_core::render::{render_blocks, Element, RenderNode, RenderParams};

use crate::error::{ApiError, ApiResult};
use crate::lang::resolve_locale;
use crate::state::AppState;

/// Server-rendered project detail page: the page shell around the block
/// renderer's output.
pub fn routes() -> Router<AppState> {
    Router::new().route("/projects/{slug}", get(project_page))
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

async fn project_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LangQuery>,
    jar: CookieJar,
) -> ApiResult<Html<String>> {
    let locale = resolve_locale(query.lang.as_deref(), &jar);
    let project = state
        .client()
        .project_by_slug(&slug, locale)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no project with slug '{slug}'")))?;
    Ok(Html(render_page(&project, locale, &state.render_params())))
}

fn render_page(project: &Project, locale: Locale, params: &RenderParams) -> String {
    let body = render_blocks(&project.content_blocks, params);

    let mut rows: Vec<(&str, &str)> = vec![
        ("Location", &project.location),
        ("Client", &project.client),
        ("Typology", &project.typology),
        ("Status", &project.status),
        ("Date", &project.date),
    ];
    if let Some(size) = &project.size {
        rows.push(("Size", size));
    }
    let mut facts = Element::new("dl").attr("class", "project-facts");
    for (term, detail) in rows {
        facts = facts
            .child(Element::new("dt").text(term).into())
            .child(Element::new("dd").text(detail.to_string()).into());
    }

    let page: RenderNode = Element::new("html")
        .attr("lang", locale.as_str())
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8").into())
                .child(Element::new("title").text(project.title.clone()).into())
                .into(),
        )
        .child(
            Element::new("body")
                .child(
                    Element::new("header")
                        .child(Element::new("h1").text(project.title.clone()).into())
                        .child(facts.into())
                        .into(),
                )
                .child(
                    Element::new("main")
                        .attr("class", "project-body")
                        .child(body)
                        .into(),
                )
                .into(),
        )
        .into();

    format!("<!doctype html>{}", to_html(&page))
}
