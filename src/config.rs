//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Settings database URL (SQLite).
    pub database_url: String,

    /// Base URL for this site (used in canonical URLs).
    /// e.g., "https://ds-allroundservices.de"
    pub base_url: String,

    /// Site name shown in page titles and the footer.
    pub site_name: String,

    /// Secret used to encrypt the session cookie. Must be at least 64
    /// bytes. When absent, a volatile key is generated at startup and all
    /// session form tokens reset on restart.
    pub cookie_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `SITE_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `DATABASE_URL`: Settings database URL (default: "sqlite://ds-site.db")
    /// - `SITE_BASE_URL`: Base URL for canonical links (default: "http://localhost:8080")
    /// - `SITE_NAME`: Site name (default: "DS Allroundservices")
    /// - `SITE_COOKIE_SECRET`: Session cookie encryption secret (>= 64 bytes)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SITE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://ds-site.db".to_string());

        let base_url = std::env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("SITE_NAME").unwrap_or_else(|_| "DS Allroundservices".to_string());

        let cookie_secret = std::env::var("SITE_COOKIE_SECRET").ok();

        tracing::info!(
            bind_addr = %bind_addr,
            database_url = %database_url,
            base_url = %base_url,
            site_name = %site_name,
            cookie_secret_set = cookie_secret.is_some(),
            "site configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            base_url,
            site_name,
            cookie_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "SITE_BIND_ADDR",
        "DATABASE_URL",
        "SITE_BASE_URL",
        "SITE_NAME",
        "SITE_COOKIE_SECRET",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.database_url, "sqlite://ds-site.db");
            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.site_name, "DS Allroundservices");
            assert!(config.cookie_secret.is_none());
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("SITE_BIND_ADDR", "127.0.0.1:9090"),
                ("DATABASE_URL", "sqlite::memory:"),
                ("SITE_BASE_URL", "https://ds-allroundservices.de"),
                ("SITE_NAME", "DS Test"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.database_url, "sqlite::memory:");
                assert_eq!(config.base_url, "https://ds-allroundservices.de");
                assert_eq!(config.site_name, "DS Test");
            },
        );
    }

    #[test]
    fn config_base_url_trailing_slash_stripped() {
        with_env_vars(&[("SITE_BASE_URL", "https://ds-allroundservices.de/")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.base_url, "https://ds-allroundservices.de");
        });
    }

    #[test]
    fn config_cookie_secret_picked_up() {
        let secret = "s".repeat(64);
        with_env_vars(&[("SITE_COOKIE_SECRET", &secret)], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.cookie_secret.as_deref(), Some(secret.as_str()));
        });
    }
}
