use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::jobs::{DEFAULT_JSEARCH_HOST, DEFAULT_JSEARCH_URL};
use crate::keywords::DEFAULT_KEYWORD_COUNT;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub embedding_url: String,
    pub embedding_model: String,
    pub jsearch_url: String,
    pub jsearch_host: String,
    pub jsearch_api_key: String,
    pub keyword_count: usize,
    pub result_limit: usize,
    pub noise_words_file: Option<PathBuf>,
    pub csv_export_path: Option<PathBuf>,
    pub frontend_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            embedding_url: require_env("EMBEDDING_URL")?,
            embedding_model: env_or("EMBEDDING_MODEL", "all-MiniLM-L12-v2"),
            jsearch_url: env_or("JSEARCH_URL", DEFAULT_JSEARCH_URL),
            jsearch_host: env_or("JSEARCH_HOST", DEFAULT_JSEARCH_HOST),
            jsearch_api_key: require_env("JSEARCH_API_KEY")?,
            keyword_count: parse_env("KEYWORD_COUNT", DEFAULT_KEYWORD_COUNT)?,
            result_limit: parse_env("RESULT_LIMIT", 10)?,
            noise_words_file: optional_env("NOISE_WORDS_FILE").map(PathBuf::from),
            csv_export_path: optional_env("CSV_EXPORT_PATH").map(PathBuf::from),
            frontend_origin: env_or("FRONTEND_ORIGIN", "http://localhost:5173"),
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: usize = parse_env("JOBSCOUT_TEST_UNSET_VALUE", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("JOBSCOUT_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("JOBSCOUT_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("JOBSCOUT_TEST_BAD_PORT"));
        std::env::remove_var("JOBSCOUT_TEST_BAD_PORT");
    }

    #[test]
    fn test_require_env_names_missing_key() {
        let err = require_env("JOBSCOUT_TEST_MISSING_KEY").unwrap_err();
        assert!(err.to_string().contains("JOBSCOUT_TEST_MISSING_KEY"));
    }
}
