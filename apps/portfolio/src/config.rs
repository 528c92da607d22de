use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::render::RenderMode;

const DEFAULT_RESUME_PATH: &str = "resume.json";
const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values are a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_json_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub render_mode: RenderMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resume_json_path: PathBuf::from(DEFAULT_RESUME_PATH),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            render_mode: RenderMode::Interactive,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            resume_json_path: lookup("RESUME_JSON_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_json_path),
            port: match lookup("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            render_mode: match lookup("RENDER_MODE") {
                Some(mode) => mode.parse()?,
                None => defaults.render_mode,
            },
        })
    }
}
