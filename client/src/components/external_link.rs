//! Anchor that opens its target without replacing the gallery.

use leptos::prelude::*;

use crate::state::gallery::LinkView;

#[component]
pub fn ExternalLink(link: LinkView) -> impl IntoView {
    view! {
        <a href=link.href target="_blank" rel="noopener noreferrer">
            {link.label}
        </a>
    }
}
