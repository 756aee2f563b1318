use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_db::repositories::{ImportRepo, TitleRepo};
use catalog_db::DatabaseConfig;

#[derive(Parser, Debug)]
#[command(name = "catalog-import", about = "Load a titles CSV into the catalog database")]
struct Cli {
    /// CSV with a header row: show_id, type, title, director, cast, country,
    /// date_added, release_year, rating, duration, listed_in, description.
    #[arg(long, env = "CATALOG_CSV")]
    file: PathBuf,

    /// Upsert into the existing catalog instead of replacing it.
    #[arg(long)]
    keep_existing: bool,

    /// Print the import summary as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_import=info,catalog_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let db_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let pool = catalog_db::create_pool_from_config(&db_config)
        .context("Invalid database connection options")?;

    catalog_db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let csv = tokio::fs::read(&cli.file)
        .await
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    tracing::info!(file = %cli.file.display(), bytes = csv.len(), replace = !cli.keep_existing, "Importing catalog");

    let summary = ImportRepo::import_csv(&pool, &csv, !cli.keep_existing)
        .await
        .context("Import failed; no changes were committed")?;

    let total = TitleRepo::count(&pool).await?;
    tracing::info!(
        staged = summary.staged,
        titles = summary.titles,
        directors = summary.directors,
        countries = summary.countries,
        categories = summary.categories,
        links = summary.links,
        total_titles = total,
        "Import complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    pool.close().await;
    Ok(())
}
