use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_tui::app::App;
use catalog_tui::client::{HttpTitleClient, TitleSource};
use catalog_tui::config::ViewConfig;

const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ViewConfig::from_env();

    // --- Tracing ---
    // The terminal is in raw mode, so logs go to a file.
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_tui=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    tracing::info!(
        api_url = %config.api_url,
        debounce_ms = config.debounce.as_millis() as u64,
        "Starting catalog search"
    );

    let client = Arc::new(HttpTitleClient::new(config.api_url.clone()));
    let app = App::new(client, config.debounce);
    run(app)
}

fn run<S: TitleSource + 'static>(mut app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.render(frame))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key_event(key);
                    }
                }
            }

            app.tick();

            if app.should_quit() {
                break;
            }
        }
        Ok(())
    })();

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    tracing::info!("Catalog search closed");
    result
}
