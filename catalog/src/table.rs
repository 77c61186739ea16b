//! The authoritative demo table.

use crate::{Catalog, Group, Item, Link};

/// Item with no reference links.
const fn demo(name: &'static str) -> Item {
    Item { name, links: &[] }
}

const CLEAR: Item = Item {
    name: "clear",
    links: &[
        Link {
            name: "zig",
            target: "https://github.com/ousttrue/zig-sokol-sample/blob/master/sokol_examples/clear-sapp.zig",
        },
        Link { name: "c", target: "https://github.com/floooh/sokol-samples/blob/master/sapp/clear-sapp.c" },
    ],
};

/// Every group shown on the gallery page, in display order.
pub static CATALOG: Catalog = Catalog::new(&[
    Group {
        name: "basic",
        url: None,
        items: &[
            CLEAR,
            demo("triangle"),
            demo("triangle-bufferless"),
            demo("quad"),
            demo("bufferoffsets"),
            demo("cube"),
            demo("noninterleaved"),
            demo("texcube"),
            demo("vertexpull"),
            demo("sbuftex"),
        ],
    },
    Group {
        name: "shape",
        url: None,
        items: &[
            demo("shapes"),
            demo("shapes-transform"),
        ],
    },
    Group {
        name: "samples",
        url: None,
        items: &[
            demo("offscreen"),
            demo("offscreen-msaa"),
            demo("instancing"),
            demo("instancing-pull"),
            demo("mrt"),
            demo("mrt-pixelformats"),
            demo("arraytex"),
            demo("tex3d"),
            demo("dyntex3d"),
            demo("dyntex"),
            demo("basisu"),
            demo("cubemap-jpeg"),
            demo("cubemaprt"),
            demo("miprender"),
            demo("layerrender"),
            demo("primtypes"),
            demo("uvwrap"),
            demo("mipmap"),
            demo("uniformtypes"),
            demo("blend"),
            demo("sdf"),
            demo("shadows"),
            demo("shadows-depthtex"),
            demo("nuklear"),
            demo("nuklear-images"),
            demo("sgl-microui"),
            demo("fontstash"),
            demo("fontstash-layers"),
            demo("events"),
            demo("icon"),
            demo("droptest"),
            demo("pixelformats"),
            demo("drawcallperf"),
            demo("saudio"),
            demo("modplay"),
            demo("noentry"),
            demo("restart"),
            demo("loadpng"),
            demo("plmpeg"),
            demo("cgltf"),
            demo("shdfeatures"),
        ],
    },
    Group {
        name: "sgl",
        url: None,
        items: &[
            demo("sgl"),
            demo("sgl-lines"),
            demo("sgl-points"),
            demo("sgl-context"),
        ],
    },
    Group {
        name: "imgui",
        url: None,
        items: &[
            demo("imgui"),
            demo("imgui-dock"),
            demo("imgui-highdpi"),
            demo("cimgui"),
            demo("imgui-images"),
            demo("imgui-usercallback"),
        ],
    },
    Group {
        name: "debugtext",
        url: None,
        items: &[
            demo("debugtext"),
            demo("debugtext-printf"),
            demo("debugtext-userfont"),
            demo("debugtext-context"),
            demo("debugtext-layers"),
        ],
    },
    Group {
        name: "ozz",
        url: None,
        items: &[
            demo("ozz-anim"),
            demo("ozz-skin"),
            demo("ozz-storagebuffer"),
        ],
    },
    Group {
        name: "spine",
        url: None,
        items: &[
            demo("spine-simple"),
            demo("spine-inspector"),
            demo("spine-layers"),
            demo("spine-skinsets"),
            demo("spine-switch-skinsets"),
        ],
    },
]);
