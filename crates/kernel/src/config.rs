//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Path to the YAML or JSON content fixtures document.
    pub content_fixtures: PathBuf,

    /// Public site URL; file URLs on this origin are served as relative paths.
    pub site_url: String,

    /// Path under the site URL where public files live (default: /sites/default/files).
    pub files_url: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// `Cache-Control: max-age` for projection responses, in seconds (default: 600).
    pub cache_max_age: u32,

    /// Bearer token required on every projection request. Open access when unset.
    pub api_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let content_fixtures = var("CONTENT_FIXTURES")
            .map(PathBuf::from)
            .context("CONTENT_FIXTURES environment variable is required")?;

        let site_url = var("SITE_URL").unwrap_or_else(|| format!("http://localhost:{port}"));

        let files_url = var("FILES_URL").unwrap_or_else(|| "/sites/default/files".to_string());

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|| vec!["*".to_string()]);

        let cache_max_age = var("CACHE_MAX_AGE")
            .unwrap_or_else(|| "600".to_string())
            .parse()
            .context("CACHE_MAX_AGE must be a valid u32")?;

        let api_token = var("API_TOKEN").filter(|t| !t.trim().is_empty());

        Ok(Self {
            port,
            content_fixtures,
            site_url,
            files_url,
            cors_allowed_origins,
            cache_max_age,
            api_token,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[("CONTENT_FIXTURES", "content.yml")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.content_fixtures, PathBuf::from("content.yml"));
        assert_eq!(config.site_url, "http://localhost:3000");
        assert_eq!(config.files_url, "/sites/default/files");
        assert_eq!(config.cors_allowed_origins, vec!["*"]);
        assert_eq!(config.cache_max_age, 600);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn fixtures_are_required() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("CONTENT_FIXTURES"));
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("CONTENT_FIXTURES", "content.json"),
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGINS", "https://a.test, https://b.test"),
            ("CACHE_MAX_AGE", "60"),
            ("API_TOKEN", "s3cret"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.site_url, "http://localhost:8080");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.test", "https://b.test"]
        );
        assert_eq!(config.cache_max_age, 60);
        assert_eq!(config.api_token.as_deref(), Some("s3cret"));
    }

    #[test]
    fn blank_token_means_open_access() {
        let config = load(&[("CONTENT_FIXTURES", "c.yml"), ("API_TOKEN", "  ")]).unwrap();
        assert!(config.api_token.is_none());
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert!(load(&[("CONTENT_FIXTURES", "c.yml"), ("PORT", "http")]).is_err());
        assert!(load(&[("CONTENT_FIXTURES", "c.yml"), ("CACHE_MAX_AGE", "-1")]).is_err());
    }
}
