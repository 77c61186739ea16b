//! # client
//!
//! Leptos frontend for the sokol-zig demo gallery.
//!
//! Pure view models live in `state`, the route table in `util::route`, and
//! the markup in `components` and `pages`. The `ssr` feature exposes
//! [`render::render_document`], which the `server` host calls for every page.

pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod render;
pub mod state;
pub mod util;
