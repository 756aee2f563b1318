//! Repository for loading the public titles CSV into the normalized schema.
//!
//! The CSV is streamed into a temporary staging table with `COPY`, then
//! titles, lookup tables and junction tables are populated from it with
//! set-based SQL. Multi-valued source columns (`director`, `country`,
//! `listed_in`) are comma-joined; they are split, trimmed, stripped of
//! blanks and deduplicated on the way in.

use sqlx::{PgConnection, PgPool};

use crate::models::import::ImportSummary;

/// Staging table mirroring the CSV header, dropped at commit.
const CREATE_STAGING_SQL: &str = "\
    CREATE TEMP TABLE staging_titles ( \
        show_id TEXT, \
        type TEXT, \
        title TEXT, \
        director TEXT, \
        \"cast\" TEXT, \
        country TEXT, \
        date_added TEXT, \
        release_year TEXT, \
        rating TEXT, \
        duration TEXT, \
        listed_in TEXT, \
        description TEXT \
    ) ON COMMIT DROP";

const COPY_STAGING_SQL: &str =
    "COPY staging_titles FROM STDIN WITH (FORMAT csv, HEADER true)";

const TRUNCATE_CATALOG_SQL: &str = "\
    TRUNCATE titles_directors, titles_countries, titles_categories, \
             titles, directors, countries, categories \
    RESTART IDENTITY";

/// Rows without an id, a title or a numeric year are skipped. Dates are
/// accepted as `YYYY-MM-DD` or `Month D, YYYY`; anything else is NULL.
const INSERT_TITLES_SQL: &str = "\
    INSERT INTO titles (show_id, title, type, release_year, rating, duration, date_added, description) \
    SELECT DISTINCT ON (btrim(show_id)) \
        btrim(show_id), \
        btrim(title), \
        NULLIF(btrim(type), ''), \
        btrim(release_year)::integer, \
        NULLIF(btrim(rating), ''), \
        NULLIF(btrim(duration), ''), \
        CASE \
            WHEN btrim(date_added) ~ '^[0-9]{4}-[0-9]{2}-[0-9]{2}$' \
                THEN btrim(date_added)::date \
            WHEN btrim(date_added) ~ '^[A-Za-z]+ [0-9]{1,2}, [0-9]{4}$' \
                THEN to_date(btrim(date_added), 'FMMonth FMDD, YYYY') \
        END, \
        NULLIF(btrim(description), '') \
    FROM staging_titles \
    WHERE NULLIF(btrim(show_id), '') IS NOT NULL \
      AND NULLIF(btrim(title), '') IS NOT NULL \
      AND btrim(release_year) ~ '^[0-9]+$' \
    ORDER BY btrim(show_id) \
    ON CONFLICT (show_id) DO UPDATE SET \
        title = EXCLUDED.title, \
        type = EXCLUDED.type, \
        release_year = EXCLUDED.release_year, \
        rating = EXCLUDED.rating, \
        duration = EXCLUDED.duration, \
        date_added = EXCLUDED.date_added, \
        description = EXCLUDED.description";

/// A many-to-many relation fed from one comma-joined staging column.
struct Relation {
    source_column: &'static str,
    table: &'static str,
    junction: &'static str,
    foreign_key: &'static str,
    /// Summary slot receiving the number of new lookup values.
    counter: fn(&mut ImportSummary) -> &mut u64,
}

const RELATIONS: [Relation; 3] = [
    Relation {
        source_column: "director",
        table: "directors",
        junction: "titles_directors",
        foreign_key: "director_id",
        counter: |s| &mut s.directors,
    },
    Relation {
        source_column: "country",
        table: "countries",
        junction: "titles_countries",
        foreign_key: "country_id",
        counter: |s| &mut s.countries,
    },
    Relation {
        source_column: "listed_in",
        table: "categories",
        junction: "titles_categories",
        foreign_key: "category_id",
        counter: |s| &mut s.categories,
    },
];

/// Loads catalog data.
pub struct ImportRepo;

impl ImportRepo {
    /// Import a titles CSV in a single transaction.
    ///
    /// With `replace` set, existing catalog rows are removed first;
    /// otherwise titles are upserted by `show_id` and relations are added
    /// alongside existing ones. On any error nothing is committed.
    pub async fn import_csv(
        pool: &PgPool,
        csv: &[u8],
        replace: bool,
    ) -> Result<ImportSummary, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if replace {
            sqlx::query(TRUNCATE_CATALOG_SQL).execute(&mut *tx).await?;
            tracing::debug!("Existing catalog truncated");
        }

        let mut summary = ImportSummary {
            staged: stage_csv(&mut tx, csv).await?,
            ..ImportSummary::default()
        };
        tracing::debug!(rows = summary.staged, "CSV staged");

        summary.titles = sqlx::query(INSERT_TITLES_SQL)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        for relation in &RELATIONS {
            *(relation.counter)(&mut summary) = insert_lookup_values(&mut tx, relation).await?;
            summary.links += insert_links(&mut tx, relation).await?;
        }

        tx.commit().await?;

        tracing::info!(
            staged = summary.staged,
            titles = summary.titles,
            directors = summary.directors,
            countries = summary.countries,
            categories = summary.categories,
            links = summary.links,
            "Catalog import committed",
        );

        Ok(summary)
    }
}

// ---------------------------------------------------------------------------
// Import steps
// ---------------------------------------------------------------------------

async fn stage_csv(conn: &mut PgConnection, csv: &[u8]) -> Result<u64, sqlx::Error> {
    sqlx::query(CREATE_STAGING_SQL).execute(&mut *conn).await?;

    let mut copy = conn.copy_in_raw(COPY_STAGING_SQL).await?;
    let sent = copy.send(csv).await.map(|_| ());
    if let Err(err) = sent {
        let _ = copy.abort(err.to_string()).await;
        return Err(err);
    }
    copy.finish().await
}

/// Insert each distinct, trimmed, non-blank value of the relation's
/// source column into its lookup table.
async fn insert_lookup_values(
    conn: &mut PgConnection,
    relation: &Relation,
) -> Result<u64, sqlx::Error> {
    let query = format!(
        "INSERT INTO {table} (name) \
         SELECT DISTINCT btrim(part) \
         FROM staging_titles \
         CROSS JOIN LATERAL unnest(string_to_array({column}, ',')) AS part \
         WHERE btrim(part) <> '' \
         ON CONFLICT (name) DO NOTHING",
        table = relation.table,
        column = relation.source_column,
    );
    Ok(sqlx::query(&query).execute(conn).await?.rows_affected())
}

/// Link titles to lookup values, one junction row per distinct pair.
async fn insert_links(conn: &mut PgConnection, relation: &Relation) -> Result<u64, sqlx::Error> {
    let query = format!(
        "INSERT INTO {junction} (show_id, {fk}) \
         SELECT DISTINCT t.show_id, l.id \
         FROM staging_titles s \
         CROSS JOIN LATERAL unnest(string_to_array(s.{column}, ',')) AS part \
         JOIN titles t ON t.show_id = btrim(s.show_id) \
         JOIN {table} l ON l.name = btrim(part) \
         ON CONFLICT DO NOTHING",
        junction = relation.junction,
        fk = relation.foreign_key,
        column = relation.source_column,
        table = relation.table,
    );
    Ok(sqlx::query(&query).execute(conn).await?.rows_affected())
}
