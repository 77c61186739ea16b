//! Authoring checks for a catalog table.

use std::collections::HashSet;

use crate::Catalog;

/// A malformed catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("group #{index} has an empty name")]
    EmptyGroupName { index: usize },
    #[error("group {group:?}: item #{index} has an empty name")]
    EmptyItemName { group: String, index: usize },
    #[error("group {group:?}: duplicate item {item:?}")]
    DuplicateItem { group: String, item: String },
    #[error("{owner}: link #{index} has an empty name")]
    EmptyLinkName { owner: String, index: usize },
    #[error("{owner}: {url:?} is not an absolute http(s) URL")]
    InvalidUrl { owner: String, url: String },
}

impl Catalog {
    /// Check every entry of the table, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, in display order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (index, group) in self.iter().enumerate() {
            if group.name.trim().is_empty() {
                return Err(CatalogError::EmptyGroupName { index });
            }
            if let Some(url) = group.url {
                check_url(&format!("group {:?}", group.name), url)?;
            }

            let mut seen = HashSet::new();
            for (index, item) in group.items.iter().enumerate() {
                if item.name.trim().is_empty() {
                    return Err(CatalogError::EmptyItemName { group: group.name.to_owned(), index });
                }
                if !seen.insert(item.name) {
                    return Err(CatalogError::DuplicateItem {
                        group: group.name.to_owned(),
                        item: item.name.to_owned(),
                    });
                }

                let owner = format!("item {:?}/{:?}", group.name, item.name);
                for (index, link) in item.links.iter().enumerate() {
                    if link.name.trim().is_empty() {
                        return Err(CatalogError::EmptyLinkName { owner, index });
                    }
                    check_url(&owner, link.target)?;
                }
            }
        }
        Ok(())
    }
}

fn check_url(owner: &str, url: &str) -> Result<(), CatalogError> {
    if is_absolute_http_url(url) {
        Ok(())
    } else {
        Err(CatalogError::InvalidUrl { owner: owner.to_owned(), url: url.to_owned() })
    }
}

/// `http://host[...]` or `https://host[...]` with a non-empty host and no whitespace.
pub(crate) fn is_absolute_http_url(url: &str) -> bool {
    let Some(rest) = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) else {
        return false;
    };
    if url.chars().any(char::is_whitespace) {
        return false;
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !host.is_empty() && !host.starts_with(':')
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
