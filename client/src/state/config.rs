//! Render configuration provided to pages via context.

use catalog::{BasePath, CATALOG, Catalog};

/// Everything a render needs: where the site is served and what it lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub base: BasePath,
    pub catalog: &'static Catalog,
}

impl GalleryConfig {
    /// Built-in catalog served under `base`.
    #[must_use]
    pub fn new(base: BasePath) -> Self {
        Self { base, catalog: &CATALOG }
    }

    #[must_use]
    pub fn with_catalog(base: BasePath, catalog: &'static Catalog) -> Self {
        Self { base, catalog }
    }
}
