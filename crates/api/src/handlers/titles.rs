//! Handlers for catalog title search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::search::{normalize_term, validate_term};
use catalog_db::repositories::TitleRepo;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/titles
///
/// Lists titles with their directors, countries and categories, optionally
/// filtered by a case-insensitive substring of the title (`?search=`).
pub async fn list_titles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let term = normalize_term(params.search.as_deref());
    if let Some(term) = term {
        validate_term(term)?;
    }

    let start = std::time::Instant::now();
    let titles = TitleRepo::search(&state.pool, term).await?;

    tracing::debug!(
        search = ?term,
        results = titles.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Title search executed",
    );

    Ok(Json(DataResponse { data: titles }))
}
