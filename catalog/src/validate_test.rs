use super::*;
use crate::{Group, Item, Link};

const fn group(name: &'static str, items: &'static [Item]) -> Group {
    Group { name, url: None, items }
}

#[test]
fn accepts_well_formed_table() {
    static GROUPS: &[Group] = &[
        Group {
            name: "sokol",
            url: Some("https://github.com/floooh/sokol"),
            items: &[Item { name: "clear", links: &[Link { name: "c", target: "http://example.com/clear.c" }] }],
        },
        group("empty", &[]),
    ];
    assert_eq!(Catalog::new(GROUPS).validate(), Ok(()));
}

#[test]
fn rejects_empty_group_name() {
    static GROUPS: &[Group] = &[group("basic", &[]), group(" ", &[])];
    assert_eq!(Catalog::new(GROUPS).validate(), Err(CatalogError::EmptyGroupName { index: 1 }));
}

#[test]
fn rejects_empty_item_name() {
    static GROUPS: &[Group] = &[group("basic", &[Item { name: "", links: &[] }])];
    assert_eq!(
        Catalog::new(GROUPS).validate(),
        Err(CatalogError::EmptyItemName { group: "basic".to_owned(), index: 0 })
    );
}

#[test]
fn rejects_duplicate_item_within_group() {
    static GROUPS: &[Group] = &[group(
        "basic",
        &[Item { name: "cube", links: &[] }, Item { name: "quad", links: &[] }, Item { name: "cube", links: &[] }],
    )];
    assert_eq!(
        Catalog::new(GROUPS).validate(),
        Err(CatalogError::DuplicateItem { group: "basic".to_owned(), item: "cube".to_owned() })
    );
}

#[test]
fn allows_same_item_name_in_different_groups() {
    static GROUPS: &[Group] = &[
        group("sgl", &[Item { name: "sgl", links: &[] }]),
        group("other", &[Item { name: "sgl", links: &[] }]),
    ];
    assert_eq!(Catalog::new(GROUPS).validate(), Ok(()));
}

#[test]
fn rejects_relative_link_target() {
    static GROUPS: &[Group] =
        &[group("basic", &[Item { name: "clear", links: &[Link { name: "zig", target: "/clear-sapp.zig" }] }])];
    let err = Catalog::new(GROUPS).validate().unwrap_err();
    assert!(matches!(err, CatalogError::InvalidUrl { ref url, .. } if url == "/clear-sapp.zig"));
}

#[test]
fn rejects_unnamed_link() {
    static GROUPS: &[Group] =
        &[group("basic", &[Item { name: "clear", links: &[Link { name: "", target: "https://example.com" }] }])];
    let err = Catalog::new(GROUPS).validate().unwrap_err();
    assert!(matches!(err, CatalogError::EmptyLinkName { index: 0, .. }));
}

#[test]
fn rejects_invalid_group_url() {
    static GROUPS: &[Group] = &[Group { name: "basic", url: Some("github.com/floooh"), items: &[] }];
    let err = Catalog::new(GROUPS).validate().unwrap_err();
    assert_eq!(err.to_string(), "group \"basic\": \"github.com/floooh\" is not an absolute http(s) URL");
}

#[test]
fn absolute_url_check() {
    assert!(is_absolute_http_url("https://github.com/floooh/sokol-zig"));
    assert!(is_absolute_http_url("http://localhost:8080/"));
    assert!(is_absolute_http_url("https://example.com?q=1"));
    assert!(!is_absolute_http_url("https://"));
    assert!(!is_absolute_http_url("https:///path"));
    assert!(!is_absolute_http_url("ftp://example.com"));
    assert!(!is_absolute_http_url("https://exa mple.com"));
    assert!(!is_absolute_http_url("mailto:someone@example.com"));
}
