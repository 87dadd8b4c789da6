//! Runtime configuration, read from the environment (and `.env` when present).

use std::path::PathBuf;

/// Store location, relative to the working directory unless absolute.
pub const DEFAULT_DATABASE: &str = "ios.sqlite";
pub const DEFAULT_HDIUTIL: &str = "hdiutil";

pub const DATABASE_VAR: &str = "LOCDB_DATABASE";
pub const HDIUTIL_VAR: &str = "LOCDB_HDIUTIL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    /// Program used to attach and detach disk images.
    pub hdiutil: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            hdiutil: PathBuf::from(DEFAULT_HDIUTIL),
        }
    }
}

impl AppConfig {
    /// Load from process environment after applying a `.env` file, if any.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Ignoring unreadable .env file: {e}"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or blank values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            database_path: get(DATABASE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            hdiutil: get(HDIUTIL_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.hdiutil),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
