use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CV_DATA_PATH: &str = "data/data.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` serves the bundled CV.
#[derive(Debug, Clone)]
pub struct Config {
    pub cv_data_path: PathBuf,
    /// Alternate CV served for `?cv=alt`. Disabled when unset.
    pub cv_alt_data_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cv_data_path: std::env::var("CV_DATA_PATH")
                .unwrap_or_else(|_| DEFAULT_CV_DATA_PATH.to_string())
                .into(),
            cv_alt_data_path: optional_env("CV_ALT_DATA_PATH").map(PathBuf::from),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    #[cfg(test)]
    pub fn for_data(path: &std::path::Path) -> Self {
        Config {
            cv_data_path: path.to_path_buf(),
            cv_alt_data_path: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
