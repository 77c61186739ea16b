//! Host configuration parsed from environment variables.

use std::path::PathBuf;

use catalog::{BASE_PATH_ENV, BasePath, BasePathError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),

    #[error("invalid {var}: {source}")]
    BasePath {
        var: &'static str,
        #[source]
        source: BasePathError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the `wasm/` demos and `assets/` chrome.
    pub site_dir: PathBuf,
    pub base_path: BasePath,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `../site` next to this crate
    /// - `GALLERY_BASE_PATH`: default the base path baked in at build time, else `/`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let site_dir = lookup("SITE_DIR").map_or_else(default_site_dir, PathBuf::from);

        let base_path = match lookup(BASE_PATH_ENV) {
            Some(raw) => BasePath::parse(&raw),
            None => BasePath::from_build_env(),
        }
        .map_err(|source| ConfigError::BasePath { var: BASE_PATH_ENV, source })?;

        Ok(Self { port, site_dir, base_path })
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
