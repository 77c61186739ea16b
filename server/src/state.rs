//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup; handlers only read the render config and site
//! directory, so clones share both through `Arc`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use client::state::config::GalleryConfig;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub gallery: Arc<GalleryConfig>,
    pub site_dir: Arc<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::from_parts(GalleryConfig::new(config.base_path.clone()), config.site_dir.clone())
    }

    #[must_use]
    pub fn from_parts(gallery: GalleryConfig, site_dir: PathBuf) -> Self {
        Self { gallery: Arc::new(gallery), site_dir: Arc::new(site_dir) }
    }

    #[must_use]
    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }
}
