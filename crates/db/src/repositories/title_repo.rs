//! Repository for the `titles` table and its three relations.
//!
//! A single statement joins titles to directors, countries and categories
//! through their junction tables and aggregates each relation per title.

use catalog_core::catalog::TitleRecord;
use catalog_core::search::like_pattern;
use sqlx::PgPool;

use crate::models::title::TitleRow;

/// Aggregated title query.
///
/// `LEFT JOIN`s keep titles with no relations; joining three one-to-many
/// relations multiplies rows, so every aggregate is `DISTINCT`. `FILTER`
/// drops the NULLs produced by missing relations and `COALESCE` turns an
/// all-NULL group into an empty array. `$1` is either NULL (no filter) or
/// an escaped `%term%` pattern.
const SEARCH_SQL: &str = "\
    SELECT \
        s.show_id, \
        s.title, \
        COALESCE(s.type, '') AS kind, \
        s.release_year, \
        s.rating, \
        COALESCE(s.duration, '') AS duration, \
        s.date_added, \
        COALESCE(s.description, '') AS description, \
        COALESCE(array_agg(DISTINCT d.name ORDER BY d.name) FILTER (WHERE d.name IS NOT NULL), '{}')::text[] AS directors, \
        COALESCE(array_agg(DISTINCT c.name ORDER BY c.name) FILTER (WHERE c.name IS NOT NULL), '{}')::text[] AS countries, \
        COALESCE(array_agg(DISTINCT cat.name ORDER BY cat.name) FILTER (WHERE cat.name IS NOT NULL), '{}')::text[] AS categories \
    FROM titles s \
    LEFT JOIN titles_directors sd ON sd.show_id = s.show_id \
    LEFT JOIN directors d ON d.id = sd.director_id \
    LEFT JOIN titles_countries sc ON sc.show_id = s.show_id \
    LEFT JOIN countries c ON c.id = sc.country_id \
    LEFT JOIN titles_categories scat ON scat.show_id = s.show_id \
    LEFT JOIN categories cat ON cat.id = scat.category_id \
    WHERE ($1::text IS NULL OR s.title ILIKE $1) \
    GROUP BY s.show_id \
    ORDER BY s.title ASC, s.show_id ASC";

/// Read-only access to catalog titles.
pub struct TitleRepo;

impl TitleRepo {
    /// List titles whose title contains `term` (case-insensitive), with
    /// their directors, countries and categories.
    ///
    /// `None` lists every title. Callers are expected to have normalized
    /// the term with [`catalog_core::search::normalize_term`].
    pub async fn search(
        pool: &PgPool,
        term: Option<&str>,
    ) -> Result<Vec<TitleRecord>, sqlx::Error> {
        let pattern = term.map(like_pattern);

        let rows = sqlx::query_as::<_, TitleRow>(SEARCH_SQL)
            .bind(pattern)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(TitleRecord::from).collect())
    }

    /// Count all titles in the catalog.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM titles")
            .fetch_one(pool)
            .await
    }
}
