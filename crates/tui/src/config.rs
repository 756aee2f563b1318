use std::time::Duration;

/// Default debounce delay between the last keystroke and the fetch.
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Runtime configuration for the search table, loaded from environment
/// variables.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Base URL of the catalog API (no trailing slash).
    pub api_url: String,
    /// Quiet period after the last edit before a fetch is issued.
    pub debounce: Duration,
    /// File receiving tracing output while the terminal is in raw mode.
    pub log_file: String,
}

impl ViewConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default                  |
    /// |----------------------|--------------------------|
    /// | `CATALOG_API_URL`    | `http://localhost:3000`  |
    /// | `SEARCH_DEBOUNCE_MS` | `1000`                   |
    /// | `CATALOG_TUI_LOG`    | `catalog-tui.log`        |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("CATALOG_API_URL")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let debounce_ms: u64 = lookup("SEARCH_DEBOUNCE_MS")
            .map(|v| v.parse().expect("SEARCH_DEBOUNCE_MS must be a valid u64"))
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        let log_file = lookup("CATALOG_TUI_LOG").unwrap_or_else(|| "catalog-tui.log".into());

        Self {
            api_url,
            debounce: Duration::from_millis(debounce_ms),
            log_file,
        }
    }
}
