use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// Database connection configuration loaded from environment variables.
///
/// Either a full `DATABASE_URL` or the individual parts may be given; when
/// `DATABASE_URL` is set it wins.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL, overriding every other field when present.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    /// Database (schema) name.
    pub database: String,
    /// Upper bound on pooled connections (default: `10`).
    pub max_connections: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not valid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl DatabaseConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default     |
    /// |----------------------------|-------------|
    /// | `DATABASE_URL`             | unset       |
    /// | `DATABASE_HOST`            | `localhost` |
    /// | `DATABASE_PORT`            | `5432`      |
    /// | `DATABASE_USER`            | `postgres`  |
    /// | `DATABASE_PASSWORD`        | unset       |
    /// | `DATABASE_SCHEMA`          | `catalog`   |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`        |
    ///
    /// `DATABASE_HOST` may carry a `:port` suffix, which takes precedence
    /// over `DATABASE_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = match get("DATABASE_PORT") {
            Some(raw) => parse_var("DATABASE_PORT", &raw)?,
            None => 5432,
        };

        let raw_host = get("DATABASE_HOST").unwrap_or_else(|| "localhost".into());
        let (host, port) = match raw_host.rsplit_once(':') {
            Some((h, p)) if !h.is_empty() => (h.to_string(), parse_var("DATABASE_HOST", p)?),
            _ => (raw_host, port),
        };

        let max_connections: u32 = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_var("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => 10,
        };
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            url: get("DATABASE_URL"),
            host,
            port,
            user: get("DATABASE_USER").unwrap_or_else(|| "postgres".into()),
            password: lookup("DATABASE_PASSWORD").filter(|v| !v.is_empty()),
            database: get("DATABASE_SCHEMA").unwrap_or_else(|| "catalog".into()),
            max_connections,
        })
    }

    /// Build sqlx connect options from this configuration.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
                var: "DATABASE_URL",
                reason: e.to_string(),
            });
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}
