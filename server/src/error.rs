//! Startup failures for the gallery host.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// The built-in table failed authoring checks.
    #[error("catalog: {0}")]
    Catalog(#[from] catalog::CatalogError),

    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
