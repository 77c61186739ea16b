//! Catch-all page for every path other than the index.

use leptos::prelude::*;

/// Fixed text shown for unknown paths.
pub const NOT_FOUND_TEXT: &str = "404 not found";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not_found">
            <div>{NOT_FOUND_TEXT}</div>
        </div>
    }
}
