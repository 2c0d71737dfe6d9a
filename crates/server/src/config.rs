use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::Context;
use performance::AirportCatalog;
use serde::Deserialize;
use tracing::info;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub static_dir: PathBuf,
    pub airports_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:3030".into(),
            static_dir: PathBuf::from("static"),
            airports_path: None,
            log_filter: "info".into(),
        }
    }
}

/// Runs before logging is set up, so an unreadable settings file is handed
/// back for the caller to report.
pub fn load_settings() -> (Settings, Option<toml::de::Error>) {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    resolve_settings(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then `server.toml` keys, then environment overrides. The plain
/// variable names are read first so the `APP__` forms win.
pub(crate) fn resolve_settings(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> (Settings, Option<toml::de::Error>) {
    let mut settings = Settings::default();
    let mut file_error = None;

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("bind_addr") {
                    settings.server_bind = v.clone();
                }
                if let Some(v) = file_cfg.get("static_dir") {
                    settings.static_dir = PathBuf::from(v);
                }
                if let Some(v) = file_cfg.get("airports_path") {
                    settings.airports_path = Some(PathBuf::from(v));
                }
                if let Some(v) = file_cfg.get("log_filter") {
                    settings.log_filter = v.clone();
                }
            }
            Err(error) => file_error = Some(error),
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("APP__STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }

    if let Some(v) = env("AIRPORTS_PATH") {
        settings.airports_path = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__AIRPORTS_PATH") {
        settings.airports_path = Some(PathBuf::from(v));
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    (settings, file_error)
}

/// Loads the configured catalog, or the bundled sample catalog when no path
/// is configured.
pub fn load_catalog(settings: &Settings) -> anyhow::Result<AirportCatalog> {
    match &settings.airports_path {
        Some(path) => AirportCatalog::load(path)
            .with_context(|| format!("failed to load airport catalog '{}'", path.display())),
        None => {
            let catalog = AirportCatalog::bundled().context("bundled airport catalog is invalid")?;
            info!(airports = catalog.len(), "using bundled airport catalog");
            Ok(catalog)
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
