//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Number of actix worker threads.
    pub workers: usize,
    /// Populate the store with seed posts on startup.
    pub seed_posts: bool,
    /// Maximum accepted JSON body size, in bytes.
    pub json_body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 1,
            seed_posts: true,
            json_body_limit: 64 * 1024,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            workers: parse_var("WORKERS")
                .filter(|w| *w > 0)
                .unwrap_or(defaults.workers),
            seed_posts: env::var("SEED_POSTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_posts),
            json_body_limit: parse_var("JSON_BODY_LIMIT").unwrap_or(defaults.json_body_limit),
        }
    }

    /// Configuration for tests: ephemeral port, seeded store.
    pub fn ephemeral() -> Self {
        Self {
            port: 0,
            ..Self::default()
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
