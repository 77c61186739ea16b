use leptos::prelude::*;

use crate::state::gallery::BadgeView;

/// Attribution tile shown ahead of the catalog groups.
#[component]
pub fn Badge(badge: BadgeView) -> impl IntoView {
    let images = badge
        .images
        .into_iter()
        .map(|image| view! { <img width=image.width.to_string() src=image.src/> })
        .collect_view();

    view! {
        <div class="item badge">
            <a href=badge.href>{images}</a>
        </div>
    }
}
