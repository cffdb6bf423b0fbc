//! Inline SVG glyphs for menu entries and shell chrome.
//!
//! DESIGN
//! ======
//! Glyphs are path data keyed by enum, so menus stay plain data and the
//! renderer is a single variant dispatch. Menu icons take color and an
//! emphasis variant (outlined vs filled); chrome glyphs are always outlined
//! and inherit `currentColor`.

use leptos::prelude::*;

use crate::menu::IconKind;
use crate::util::appearance::IconVariant;

/// Glyphs used by the panel and top bar controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ChevronDown,
    SidebarCollapse,
    SidebarExpand,
    Sun,
    Moon,
    Shield,
    Exit,
}

fn menu_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Home => &["M3 10.5 12 3l9 7.5V20a1 1 0 0 1-1 1h-5v-6h-6v6H4a1 1 0 0 1-1-1z"],
        IconKind::People => &[
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M2 21v-1a6 6 0 0 1 6-6h2a6 6 0 0 1 6 6v1z",
            "M16 3.5a4 4 0 0 1 0 7.5M18 14a6 6 0 0 1 4 6v1h-3",
        ],
        IconKind::Content => &[
            "M4 4h6a2 2 0 0 1 2 2v14a2 2 0 0 0-2-2H4z",
            "M20 4h-6a2 2 0 0 0-2 2v14a2 2 0 0 1 2-2h6z",
        ],
        IconKind::Reports => &["M4 20V10h4v10zM10 20V4h4v16zM16 20v-7h4v7z"],
        IconKind::Skills => &["M12 2l2.9 6.3 6.9.7-5.2 4.6 1.5 6.8L12 17l-6.1 3.4 1.5-6.8L2.2 9l6.9-.7z"],
        IconKind::LearningRecords => &[
            "M6 2h9l5 5v15H6z",
            "M14 2v6h6M9 13h8M9 17h6",
        ],
        IconKind::Events => &["M4 5h16v16H4zM4 10h16M8 3v4M16 3v4"],
        IconKind::Settings => &[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.7 1.7 0 0 0 .3 1.8l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-1.8-.3 1.7 1.7 0 0 0-1 1.5V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-1.1-1.5 1.7 1.7 0 0 0-1.8.3l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1a1.7 1.7 0 0 0 .3-1.8 1.7 1.7 0 0 0-1.5-1H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.5-1.1 1.7 1.7 0 0 0-.3-1.8l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1a1.7 1.7 0 0 0 1.8.3H9a1.7 1.7 0 0 0 1-1.5V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 1 1.5 1.7 1.7 0 0 0 1.8-.3l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0-.3 1.8V9a1.7 1.7 0 0 0 1.5 1H21a2 2 0 1 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1z",
        ],
        IconKind::Academy => &["M2 9l10-5 10 5-10 5z", "M6 11v5c3 2 9 2 12 0v-5"],
        IconKind::Help => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3M12 17h.01",
        ],
    }
}

fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::ChevronDown => &["M6 9l6 6 6-6"],
        Glyph::SidebarCollapse => &["M4 4h16v16H4zM9 4v16", "M16 9l-3 3 3 3"],
        Glyph::SidebarExpand => &["M4 4h16v16H4zM9 4v16", "M13 9l3 3-3 3"],
        Glyph::Sun => &["M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8z", "M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4"],
        Glyph::Moon => &["M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"],
        Glyph::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        Glyph::Exit => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5M21 12H9"],
    }
}

/// Render a menu icon at `size` pixels in `color`.
pub fn menu_icon(kind: IconKind, size: u32, color: &'static str, variant: IconVariant) -> impl IntoView {
    let fill = match variant {
        IconVariant::Bold => color,
        IconVariant::Linear => "none",
    };
    svg_paths(menu_paths(kind), size, fill, color)
}

/// Render a chrome glyph at `size` pixels using the surrounding text color.
pub fn glyph(glyph: Glyph, size: u32) -> impl IntoView {
    svg_paths(glyph_paths(glyph), size, "none", "currentColor")
}

fn svg_paths(paths: &'static [&'static str], size: u32, fill: &'static str, stroke: &'static str) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill=fill
            stroke=stroke
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
