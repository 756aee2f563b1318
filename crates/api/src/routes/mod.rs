pub mod health;
pub mod titles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /titles                                          search titles (?search=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/titles", titles::router())
}
