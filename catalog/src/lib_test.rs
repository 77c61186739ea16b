use super::*;

#[test]
fn builtin_catalog_is_valid() {
    assert_eq!(CATALOG.validate(), Ok(()));
}

#[test]
fn builtin_catalog_keeps_authored_group_order() {
    let names: Vec<&str> = CATALOG.iter().map(|group| group.name).collect();
    assert_eq!(names, ["basic", "shape", "samples", "sgl", "imgui", "debugtext", "ozz", "spine"]);
}

#[test]
fn builtin_catalog_starts_with_clear_and_its_sources() {
    let basic = &CATALOG.groups()[0];
    assert_eq!(basic.items[0].name, "clear");
    assert_eq!(basic.items[1].name, "triangle");

    let links: Vec<&str> = basic.items[0].links.iter().map(|link| link.name).collect();
    assert_eq!(links, ["zig", "c"]);
    assert!(basic.items[1].links.is_empty());
}

#[test]
fn item_count_sums_all_groups() {
    let expected: usize = CATALOG.groups().iter().map(|group| group.items.len()).sum();
    assert_eq!(CATALOG.item_count(), expected);
    assert_eq!(CATALOG.item_count(), 76);
}

#[test]
fn find_item_scopes_lookup_to_group() {
    assert_eq!(CATALOG.find_item("sgl", "sgl-lines").map(|item| item.name), Some("sgl-lines"));
    assert!(CATALOG.find_item("imgui", "sgl-lines").is_none());
    assert!(CATALOG.find_item("missing", "clear").is_none());
}

#[test]
fn catalog_iterates_by_reference() {
    let mut count = 0;
    for group in &CATALOG {
        assert!(!group.items.is_empty());
        count += 1;
    }
    assert_eq!(count, CATALOG.groups().len());
}
