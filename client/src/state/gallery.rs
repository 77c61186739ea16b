//! View models for the gallery page.
//!
//! DESIGN
//! ======
//! Every address and label the markup shows is computed here from the catalog
//! and base path, so components only lay out precomputed fields. Building the
//! same config twice yields equal values.

use catalog::{BasePath, Group, Item, Link};

use super::config::GalleryConfig;

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Decorative prefix for externally opened links.
pub const LINK_MARKER: &str = "🔗";

/// Display size of a demo thumbnail, in CSS pixels.
pub const THUMBNAIL_WIDTH: u32 = 150;
pub const THUMBNAIL_HEIGHT: u32 = 78;

/// A link that opens in a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

impl LinkView {
    #[must_use]
    pub fn external(name: &str, target: &str) -> Self {
        Self { label: format!("{LINK_MARKER}{name}"), href: target.to_owned() }
    }
}

impl From<&Link> for LinkView {
    fn from(link: &Link) -> Self {
        Self::external(link.name, link.target)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// One demo tile: the demo link with its thumbnail, then its reference links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub name: String,
    pub href: String,
    pub thumbnail: Thumbnail,
    pub links: Vec<LinkView>,
}

impl ItemView {
    #[must_use]
    pub fn build(base: &BasePath, item: &Item) -> Self {
        Self {
            name: item.name.to_owned(),
            href: base.demo_page_url(item.name),
            thumbnail: Thumbnail {
                src: base.demo_thumbnail_url(item.name),
                width: THUMBNAIL_WIDTH,
                height: THUMBNAIL_HEIGHT,
            },
            links: item.links.iter().map(LinkView::from).collect(),
        }
    }
}

/// Group label: an external link when the group has a url, plain text otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupHeader {
    Link(LinkView),
    Plain(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupView {
    pub name: String,
    pub header: GroupHeader,
    pub items: Vec<ItemView>,
}

impl GroupView {
    #[must_use]
    pub fn build(base: &BasePath, group: &Group) -> Self {
        let header = match group.url {
            Some(url) => GroupHeader::Link(LinkView::external(group.name, url)),
            None => GroupHeader::Plain(group.name.to_owned()),
        };
        Self {
            name: group.name.to_owned(),
            header,
            items: group.items.iter().map(|item| ItemView::build(base, item)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeImage {
    pub src: String,
    pub width: u32,
}

/// Attribution tile linking to an upstream project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeView {
    pub href: String,
    pub images: Vec<BadgeImage>,
}

struct BadgeSpec {
    href: &'static str,
    images: &'static [(&'static str, u32)],
}

const BADGES: [BadgeSpec; 3] = [
    BadgeSpec { href: "https://github.com/ousttrue/zig-sokol-sample", images: &[("github-mark.svg", 150)] },
    BadgeSpec { href: "https://floooh.github.io/sokol-html5/", images: &[("sokol-logo.svg", 150)] },
    BadgeSpec {
        href: "https://github.com/floooh/sokol-zig",
        images: &[("sokol-logo.svg", 75), ("zig-mark.svg", 75)],
    },
];

impl BadgeView {
    fn build(base: &BasePath, badge: &BadgeSpec) -> Self {
        Self {
            href: badge.href.to_owned(),
            images: badge
                .images
                .iter()
                .map(|&(file, width)| BadgeImage { src: base.asset_url(file), width })
                .collect(),
        }
    }
}

/// The whole gallery: badges first, then every group in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryView {
    pub badges: Vec<BadgeView>,
    pub groups: Vec<GroupView>,
}

impl GalleryView {
    #[must_use]
    pub fn build(config: &GalleryConfig) -> Self {
        Self {
            badges: BADGES.iter().map(|badge| BadgeView::build(&config.base, badge)).collect(),
            groups: config.catalog.iter().map(|group| GroupView::build(&config.base, group)).collect(),
        }
    }
}
