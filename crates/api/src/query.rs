//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Title search parameters (`?search=`).
///
/// An absent or blank `search` lists every title.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}
