//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled demos and gallery chrome are served as static files under
//! `<base>wasm/` and `<base>assets/`. Every request those directories cannot
//! answer, and every other path, is rendered by `pages::page`, which shows the
//! gallery at the base path and the not-found page elsewhere.

pub mod pages;

use axum::Router;
use axum::handler::Handler;
use catalog::{ASSET_DIR, DEMO_DIR};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Full gallery host: static asset directories plus rendered pages.
pub fn app(state: AppState) -> Router {
    let base = state.gallery.base.clone();
    let pages = pages::page.with_state(state.clone());

    let demos = ServeDir::new(state.site_dir().join(DEMO_DIR)).fallback(pages.clone());
    let assets = ServeDir::new(state.site_dir().join(ASSET_DIR)).fallback(pages);

    Router::new()
        .nest_service(&base.join(DEMO_DIR), demos)
        .nest_service(&base.join(ASSET_DIR), assets)
        .fallback(pages::page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
