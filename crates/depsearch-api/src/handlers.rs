use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    Form, Json,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use depsearch_core::{IntersectMode, common_imports, ranked_records, search_and_enrich};
use serde::{Deserialize, Serialize};

/// Separator between identifiers in the `packages` field.
const PACKAGE_SEPARATOR: &str = ", ";

#[derive(Deserialize)]
pub struct PackagesForm {
    #[serde(default)]
    pub packages: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Splits a `packages` value on the literal `", "` separator.
///
/// A trailing separator leaves one empty element at the end; that artifact
/// is dropped. Interior empty elements stay as given.
fn parse_package_list(input: &str) -> ApiResult<Vec<String>> {
    if input.is_empty() {
        return Err(ApiError::InvalidInput("packages".into()));
    }

    let mut list: Vec<String> = input
        .split(PACKAGE_SEPARATOR)
        .map(str::to_string)
        .collect();
    if list.last().is_some_and(String::is_empty) {
        list.pop();
    }

    Ok(list)
}

fn json_response(body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// POST /intersect/repo - common imports across the batch, enriched into
/// full records and ranked by star count.
pub async fn intersect_repo(
    State(state): State<AppState>,
    Form(form): Form<PackagesForm>,
) -> ApiResult<Response> {
    let packages = parse_package_list(&form.packages)?;
    let policy = state.config.fetch_failure;

    let common =
        common_imports(state.index.as_ref(), &packages, IntersectMode::Raw, policy).await?;
    let ranked = ranked_records(
        state.index.as_ref(),
        &common,
        state.config.intersect_detail_limit,
        policy,
    )
    .await?;

    tracing::debug!(
        "intersected {} packages into {} ranked records",
        packages.len(),
        ranked.len()
    );
    let body = serde_json::to_vec(&ranked)?;
    Ok(json_response(body))
}

/// POST /intersect/human - common imports across the batch, collapsed to
/// `org/repo` form.
pub async fn intersect_human(
    State(state): State<AppState>,
    Form(form): Form<PackagesForm>,
) -> ApiResult<Response> {
    let packages = parse_package_list(&form.packages)?;

    let common = common_imports(
        state.index.as_ref(),
        &packages,
        IntersectMode::Human,
        state.config.fetch_failure,
    )
    .await?;

    let body = serde_json::to_vec(&common)?;
    Ok(json_response(body))
}

/// GET /search - free-text search with per-hit star counts, in relevance
/// order.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Response> {
    let enriched = search_and_enrich(
        state.index.as_ref(),
        &params.query,
        state.config.search_hit_limit,
        state.config.fetch_failure,
    )
    .await?;

    let body = serde_json::to_vec(&enriched)?;
    Ok(json_response(body))
}
