use dioxus::prelude::*;

/// Glyphs the sidebar can ask for by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Map,
    User,
    Leaf,
    Comment,
    Bug,
}

/// Renders one glyph as an inline stroke-style SVG at the requested size.
#[component]
pub fn NavIcon(kind: IconKind, size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {glyph(kind)}
        }
    }
}

fn glyph(kind: IconKind) -> Element {
    match kind {
        IconKind::Map => rsx! {
            polygon { points: "1 6 1 22 8 18 16 22 23 18 23 2 16 6 8 2 1 6" }
            line { x1: "8", y1: "2", x2: "8", y2: "18" }
            line { x1: "16", y1: "6", x2: "16", y2: "22" }
        },
        IconKind::User => rsx! {
            path { d: "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        },
        IconKind::Leaf => rsx! {
            path { d: "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z" }
            path { d: "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12" }
        },
        IconKind::Comment => rsx! {
            path { d: "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z" }
        },
        IconKind::Bug => rsx! {
            path { d: "m8 2 1.88 1.88" }
            path { d: "M14.12 3.88 16 2" }
            path { d: "M9 7.13v-1a3.003 3.003 0 1 1 6 0v1" }
            path { d: "M12 20c-3.3 0-6-2.7-6-6v-3a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v3c0 3.3-2.7 6-6 6" }
            path { d: "M12 20v-9" }
            path { d: "M6.53 9C4.6 8.8 3 7.1 3 5" }
            path { d: "M6 13H2" }
            path { d: "M3 21c0-2.1 1.7-3.8 3.8-4" }
            path { d: "M20.97 5c0 2.1-1.6 3.8-3.5 4" }
            path { d: "M22 13h-4" }
            path { d: "M17.2 17c2.1.2 3.8 1.9 4 4" }
        },
    }
}
