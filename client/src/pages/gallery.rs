//! Index page: attribution badges followed by every catalog group.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::group_section::GroupSection;
use crate::state::config::GalleryConfig;
use crate::state::gallery::GalleryView;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let config = expect_context::<GalleryConfig>();
    let gallery = GalleryView::build(&config);

    let badges = gallery.badges.into_iter().map(|badge| view! { <Badge badge=badge/> }).collect_view();
    let groups = gallery
        .groups
        .into_iter()
        .map(|group| view! { <GroupSection group=group/> })
        .collect_view();

    view! {
        <div class="container">
            {badges}
            {groups}
        </div>
    }
}
