use super::*;

#[test]
fn parse_normalizes_slashes() {
    assert_eq!(BasePath::parse("zig-sokol-sample").unwrap().as_str(), "/zig-sokol-sample/");
    assert_eq!(BasePath::parse("/zig-sokol-sample").unwrap().as_str(), "/zig-sokol-sample/");
    assert_eq!(BasePath::parse("//a///b/").unwrap().as_str(), "/a/b/");
}

#[test]
fn parse_treats_empty_input_as_root() {
    assert!(BasePath::parse("").unwrap().is_root());
    assert!(BasePath::parse("  ").unwrap().is_root());
    assert!(BasePath::parse("/").unwrap().is_root());
    assert_eq!(BasePath::default(), BasePath::root());
}

#[test]
fn parse_rejects_malformed_values() {
    assert_eq!(BasePath::parse("/a b/"), Err(BasePathError::Whitespace("/a b/".to_owned())));
    assert_eq!(BasePath::parse("/a?x=1"), Err(BasePathError::QueryOrFragment("/a?x=1".to_owned())));
    assert_eq!(BasePath::parse("/a#top"), Err(BasePathError::QueryOrFragment("/a#top".to_owned())));
    assert_eq!(BasePath::parse("\\a"), Err(BasePathError::Backslash("\\a".to_owned())));
}

#[test]
fn from_str_matches_parse() {
    let parsed: BasePath = "gallery".parse().unwrap();
    assert_eq!(parsed, BasePath::parse("/gallery/").unwrap());
    assert_eq!(parsed.to_string(), "/gallery/");
}

#[test]
fn router_base_drops_trailing_slash() {
    assert_eq!(BasePath::root().router_base(), "");
    assert_eq!(BasePath::parse("/gallery/").unwrap().router_base(), "/gallery");
}

#[test]
fn is_index_accepts_base_with_or_without_trailing_slash() {
    let base = BasePath::parse("/gallery/").unwrap();
    assert!(base.is_index("/gallery/"));
    assert!(base.is_index("/gallery"));
    assert!(!base.is_index("/gallery/clear"));
    assert!(!base.is_index("/"));
    assert!(!base.is_index("/galleryx"));

    let root = BasePath::root();
    assert!(root.is_index("/"));
    assert!(root.is_index(""));
    assert!(!root.is_index("/not-a-real-path"));
    assert!(!root.is_index("//"));
}

#[test]
fn demo_urls_follow_asset_convention() {
    let base = BasePath::parse("/zig-sokol-sample/").unwrap();
    assert_eq!(base.demo_page_url("clear"), "/zig-sokol-sample/wasm/clear.html");
    assert_eq!(base.demo_thumbnail_url("clear"), "/zig-sokol-sample/wasm/clear.jpg");
    assert_eq!(BasePath::root().demo_page_url("sgl-lines"), "/wasm/sgl-lines.html");
}

#[test]
fn join_and_asset_url_share_the_prefix() {
    let base = BasePath::parse("/g/").unwrap();
    assert_eq!(base.join("/assets/gallery.css"), "/g/assets/gallery.css");
    assert_eq!(base.join("assets/gallery.css"), "/g/assets/gallery.css");
    assert_eq!(base.asset_url("zig-mark.svg"), "/g/assets/zig-mark.svg");
}
