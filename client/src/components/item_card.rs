//! Demo tile: thumbnail link to the compiled demo plus its reference links.

use leptos::prelude::*;

use crate::components::external_link::ExternalLink;
use crate::state::gallery::ItemView;

/// Renders one catalog item. The link list is always present, even when empty.
#[component]
pub fn ItemCard(item: ItemView) -> impl IntoView {
    let thumbnail = item.thumbnail;
    let links = item
        .links
        .into_iter()
        .map(|link| {
            view! {
                <li>
                    <ExternalLink link=link/>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="item">
            <a href=item.href>
                {item.name}
                <figure>
                    <img
                        width=thumbnail.width.to_string()
                        height=thumbnail.height.to_string()
                        src=thumbnail.src
                    />
                </figure>
            </a>
            <ul class="small">{links}</ul>
        </div>
    }
}
