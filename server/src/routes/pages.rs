//! Rendered HTML pages.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::Html;
use client::render::render_document;

use crate::state::AppState;

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;

/// Render whichever page the request path resolves to.
pub async fn page(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> (StatusCode, Html<String>) {
    render_page(&state, uri.path())
}

pub(crate) fn render_page(state: &AppState, path: &str) -> (StatusCode, Html<String>) {
    let doc = render_document(&state.gallery, path);
    let status = if doc.route.is_found() { StatusCode::OK } else { StatusCode::NOT_FOUND };
    tracing::debug!(%path, route = ?doc.route, %status, "rendered page");
    (status, Html(doc.html))
}
