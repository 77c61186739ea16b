//! Group header tile followed by the group's demo tiles.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::external_link::ExternalLink;
use crate::components::item_card::ItemCard;
use crate::state::gallery::{GroupHeader, GroupView};

#[component]
pub fn GroupSection(group: GroupView) -> impl IntoView {
    let header = match group.header {
        GroupHeader::Link(link) => view! { <ExternalLink link=link/> }.into_any(),
        GroupHeader::Plain(name) => name.into_any(),
    };
    let items = group.items.into_iter().map(|item| view! { <ItemCard item=item/> }).collect_view();

    view! {
        <section class="group" data-group=group.name>
            <div class="item orange">{header}</div>
            {items}
        </section>
    }
}
