//! Static demo catalog shared by the `client` renderer and the `server` host.
//!
//! The catalog is a compile-time table of groups → items → links. Nothing in
//! this crate allocates or mutates it; consumers iterate [`CATALOG`] directly
//! and pair it with a [`BasePath`] to build demo asset addresses.

mod base_path;
mod table;
mod validate;

pub use base_path::{ASSET_DIR, BASE_PATH_ENV, BasePath, BasePathError, DEMO_DIR};
pub use table::CATALOG;
pub use validate::CatalogError;

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// A named external reference attached to an item or group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    /// Display label, rendered after the link marker.
    pub name: &'static str,
    /// Absolute `http(s)` URL.
    pub target: &'static str,
}

/// A single demo entry.
///
/// `name` doubles as the asset stem: the demo lives at `wasm/<name>.html` and
/// its thumbnail at `wasm/<name>.jpg` under the base path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: &'static str,
    pub links: &'static [Link],
}

/// A named category of demos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Group {
    pub name: &'static str,
    /// When set, the group header becomes an external link.
    pub url: Option<&'static str>,
    pub items: &'static [Item],
}

/// The ordered list of all groups. Order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    groups: &'static [Group],
}

impl Catalog {
    #[must_use]
    pub const fn new(groups: &'static [Group]) -> Self {
        Self { groups }
    }

    #[must_use]
    pub const fn groups(&self) -> &'static [Group] {
        self.groups
    }

    /// Iterate groups in authored order.
    pub fn iter(&self) -> std::slice::Iter<'static, Group> {
        self.groups.iter()
    }

    /// Total number of items across all groups.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    /// Look up an item by group and item name.
    #[must_use]
    pub fn find_item(&self, group: &str, item: &str) -> Option<&'static Item> {
        self.groups
            .iter()
            .find(|g| g.name == group)
            .and_then(|g| g.items.iter().find(|i| i.name == item))
    }
}

impl IntoIterator for &Catalog {
    type Item = &'static Group;
    type IntoIter = std::slice::Iter<'static, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

