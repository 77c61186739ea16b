//! Server-side rendering of a request path into a complete HTML document.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::shell;
use crate::pages::{gallery::GalleryPage, not_found::NotFoundPage};
use crate::state::config::GalleryConfig;
use crate::util::route::{Route, resolve};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// A resolved route and its rendered markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDocument {
    pub route: Route,
    pub html: String,
}

/// Resolve `path` against the configured base and render the matching page.
pub fn render_document(config: &GalleryConfig, path: &str) -> RenderedDocument {
    let route = resolve(&config.base, path);
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(config.clone());
        let body = match route {
            Route::Gallery => view! { <GalleryPage/> }.into_any(),
            Route::NotFound => view! { <NotFoundPage/> }.into_any(),
        };
        shell(&config.base, body).to_html()
    });
    RenderedDocument { route, html: strip_hydration_markers(&html) }
}

/// Drop the `<!>` placeholders Leptos leaves for hydration; these pages are never hydrated.
/// Escaped text cannot contain a literal `<!>`, so only markers are removed.
fn strip_hydration_markers(html: &str) -> String {
    html.replace("<!>", "")
}
