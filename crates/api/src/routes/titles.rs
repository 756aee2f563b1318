//! Route definitions for catalog titles.
//!
//! Mounted at `/titles` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::titles;
use crate::state::AppState;

/// Title routes mounted at `/titles`.
///
/// ```text
/// GET    /                      -> list_titles
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(titles::list_titles))
}
