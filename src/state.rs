//! Application state shared across all request handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::Config;

/// Pool size for the settings database. The store is read-only from this
/// service and queried at most once per request.
const MAX_DB_CONNECTIONS: u32 = 4;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Settings database pool. Connections are established lazily, so a
    /// down database surfaces as a query failure at render time, not here.
    pub db: SqlitePool,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Key for the encrypted session cookie.
    cookie_key: Key,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(MAX_DB_CONNECTIONS)
            .connect_lazy(&config.database_url)?;

        let cookie_key = match config.cookie_secret.as_deref() {
            Some(secret) if secret.len() >= 64 => Key::from(secret.as_bytes()),
            Some(_) => anyhow::bail!("SITE_COOKIE_SECRET must be at least 64 bytes"),
            None => {
                tracing::warn!(
                    "SITE_COOKIE_SECRET not set, using a volatile cookie key; \
                     session form tokens reset on restart"
                );
                Key::generate()
            }
        };

        tracing::info!(
            max_db_connections = MAX_DB_CONNECTIONS,
            "application state initialized"
        );

        Ok(Self {
            db,
            config: Arc::new(config),
            cookie_key,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

/// Build an [`AppState`] backed by a private in-memory database.
///
/// The `settings` table is not created, so settings loads fail over to
/// their fallbacks unless a test creates the table itself.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    test_state_with("sqlite::memory:")
}

/// Like [`test_state`], but against the given database URL. Tests that seed
/// the settings table use a named shared-cache in-memory database so every
/// pool connection sees the same data.
#[cfg(test)]
pub(crate) fn test_state_with(database_url: &str) -> AppState {
    let config = Config {
        bind_addr: "127.0.0.1:0".to_string(),
        database_url: database_url.to_string(),
        base_url: "http://localhost:8080".to_string(),
        site_name: "DS Allroundservices".to_string(),
        cookie_secret: None,
    };
    AppState::new(config).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn state_from_default_config() {
        let state = test_state();
        assert_eq!(state.config.site_name, "DS Allroundservices");
    }

    #[tokio::test]
    async fn short_cookie_secret_rejected() {
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            database_url: "sqlite::memory:".to_string(),
            base_url: "http://localhost:8080".to_string(),
            site_name: "DS Allroundservices".to_string(),
            cookie_secret: Some("too short".to_string()),
        };
        assert!(AppState::new(config).is_err());
    }

    #[tokio::test]
    async fn long_cookie_secret_accepted() {
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            database_url: "sqlite::memory:".to_string(),
            base_url: "http://localhost:8080".to_string(),
            site_name: "DS Allroundservices".to_string(),
            cookie_secret: Some("s".repeat(64)),
        };
        assert!(AppState::new(config).is_ok());
    }
}
