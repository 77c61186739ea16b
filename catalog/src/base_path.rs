//! Deployment base path: the public URL prefix the gallery is served under.
//!
//! The same value drives route matching and every emitted asset address, so
//! it is carried as an explicit value rather than read from ambient state.

use std::fmt;

/// Environment variable holding the deployment base path.
pub const BASE_PATH_ENV: &str = "GALLERY_BASE_PATH";

/// Directory (relative to the base path) holding compiled demos and thumbnails.
pub const DEMO_DIR: &str = "wasm";

/// Directory (relative to the base path) holding gallery chrome assets.
pub const ASSET_DIR: &str = "assets";

/// Error returned by [`BasePath::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasePathError {
    #[error("base path {0:?} contains whitespace")]
    Whitespace(String),
    #[error("base path {0:?} contains a query or fragment")]
    QueryOrFragment(String),
    #[error("base path {0:?} contains a backslash")]
    Backslash(String),
}

/// A normalized base path: always starts and ends with `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// The root base path `/`.
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    /// Parse and normalize a configured base path.
    ///
    /// `""`, `"/"` and whitespace-only input all mean the root. Missing
    /// leading or trailing slashes are added and repeated slashes collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`BasePathError`] if the value contains inner whitespace, a
    /// `?`/`#`, or a backslash.
    pub fn parse(raw: &str) -> Result<Self, BasePathError> {
        let trimmed = raw.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(BasePathError::Whitespace(raw.to_owned()));
        }
        if trimmed.contains(['?', '#']) {
            return Err(BasePathError::QueryOrFragment(raw.to_owned()));
        }
        if trimmed.contains('\\') {
            return Err(BasePathError::Backslash(raw.to_owned()));
        }

        let mut normalized = String::with_capacity(trimmed.len() + 2);
        normalized.push('/');
        for segment in trimmed.split('/').filter(|s| !s.is_empty()) {
            normalized.push_str(segment);
            normalized.push('/');
        }
        Ok(Self(normalized))
    }

    /// Base path baked in at compile time via `GALLERY_BASE_PATH`, or `/`.
    ///
    /// # Errors
    ///
    /// Returns [`BasePathError`] if the baked-in value is malformed.
    pub fn from_build_env() -> Result<Self, BasePathError> {
        match option_env!("GALLERY_BASE_PATH") {
            Some(raw) => Self::parse(raw),
            None => Ok(Self::root()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Append a relative path: `"/base/"` + `"a/b"` → `"/base/a/b"`.
    #[must_use]
    pub fn join(&self, relative: &str) -> String {
        format!("{}{}", self.0, relative.trim_start_matches('/'))
    }

    /// Base in the form routers expect: no trailing slash, empty for root.
    #[must_use]
    pub fn router_base(&self) -> &str {
        self.0.trim_end_matches('/')
    }

    /// Whether `path` is the index route, ignoring one trailing slash.
    #[must_use]
    pub fn is_index(&self, path: &str) -> bool {
        let path = path.strip_suffix('/').unwrap_or(path);
        path == self.router_base()
    }

    /// Entry point of a compiled demo: `<base>wasm/<name>.html`.
    #[must_use]
    pub fn demo_page_url(&self, name: &str) -> String {
        format!("{}{DEMO_DIR}/{name}.html", self.0)
    }

    /// Thumbnail of a compiled demo: `<base>wasm/<name>.jpg`.
    #[must_use]
    pub fn demo_thumbnail_url(&self, name: &str) -> String {
        format!("{}{DEMO_DIR}/{name}.jpg", self.0)
    }

    /// Gallery chrome asset: `<base>assets/<file>`.
    #[must_use]
    pub fn asset_url(&self, file: &str) -> String {
        format!("{}{ASSET_DIR}/{file}", self.0)
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BasePath {
    type Err = BasePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "base_path_test.rs"]
mod tests;
