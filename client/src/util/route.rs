//! Two-way route table: the base path shows the gallery, anything else is 404.

use catalog::BasePath;

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Gallery,
    NotFound,
}

impl Route {
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Gallery)
    }
}

/// Classify a request path. Any query or fragment suffix is ignored.
#[must_use]
pub fn resolve(base: &BasePath, path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if base.is_index(path) { Route::Gallery } else { Route::NotFound }
}
