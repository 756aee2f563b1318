//! Title row as produced by the aggregated search query.

use catalog_core::catalog::TitleRecord;
use chrono::NaiveDate;
use sqlx::FromRow;

/// One grouped row of the title search query.
///
/// Relation columns are PostgreSQL `text[]` aggregates, already distinct
/// and free of NULLs.
#[derive(Debug, Clone, FromRow)]
pub struct TitleRow {
    pub show_id: String,
    pub title: String,
    pub kind: String,
    pub release_year: i32,
    pub rating: Option<String>,
    pub duration: String,
    pub date_added: Option<NaiveDate>,
    pub description: String,
    pub directors: Vec<String>,
    pub countries: Vec<String>,
    pub categories: Vec<String>,
}

impl From<TitleRow> for TitleRecord {
    fn from(row: TitleRow) -> Self {
        Self {
            id: row.show_id,
            title: row.title,
            kind: row.kind,
            release_year: row.release_year,
            rating: row.rating,
            duration: row.duration,
            date_added: row.date_added,
            description: row.description,
            directors: row.directors,
            countries: row.countries,
            categories: row.categories,
        }
    }
}
