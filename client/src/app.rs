//! Server document shell wrapping one rendered page.

use catalog::BasePath;
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyView;

pub const PAGE_TITLE: &str = "zig-sokol-sample";

/// Gallery stylesheet, relative to the base path.
pub const STYLESHEET: &str = "assets/gallery.css";

/// Full HTML document around `body`.
pub fn shell(base: &BasePath, body: AnyView) -> impl IntoView {
    let stylesheet = base.join(STYLESHEET);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{PAGE_TITLE}</title>
                <link rel="stylesheet" href=stylesheet/>
            </head>
            <body>{body}</body>
        </html>
    }
}
