//! Server-rendered markup of the shell components.
//!
//! Renders through `RenderHtml::to_html`, so it needs the `ssr` feature:
//! `cargo test --features ssr --test render`.

#![cfg(feature = "ssr")]

use admin_shell::components::sidebar::SidebarPanel;
use admin_shell::components::tooltip::Tooltip;
use admin_shell::components::top_nav_bar::TopNavBar;
use admin_shell::config::ShellTheme;
use leptos::prelude::*;

fn render<V: IntoView>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.set();
    view().to_html()
}

fn bubbles(html: &str) -> usize {
    html.matches("tooltip__bubble").count()
}

// =============================================================
// Tooltip
// =============================================================

#[test]
fn tooltip_renders_bubble_by_default() {
    let html = render(|| view! { <Tooltip label="Reports"><span>"R"</span></Tooltip> });
    assert_eq!(bubbles(&html), 1);
    assert!(html.contains("role=\"tooltip\""));
    assert!(html.contains("Reports"));
    assert!(html.contains("left: calc(100% + 12px);"));
}

#[test]
fn tooltip_hidden_when_show_is_false() {
    let html = render(|| view! { <Tooltip label="Reports" show=false><span>"R"</span></Tooltip> });
    assert_eq!(bubbles(&html), 0);
    assert!(!html.contains("Reports"));
    assert!(html.contains("class=\"tooltip\""));
}

#[test]
fn tooltip_offset_moves_bubble() {
    let html = render(|| view! { <Tooltip label="Help" offset=20><span>"?"</span></Tooltip> });
    assert!(html.contains("left: calc(100% + 20px);"));
}

// =============================================================
// SidebarPanel
// =============================================================

#[test]
fn expanded_sidebar_shows_only_the_collapse_control_tooltip() {
    let html = render(|| view! { <SidebarPanel/> });
    assert_eq!(bubbles(&html), 1);
    assert!(html.contains("Collapse sidebar"));
    assert!(html.contains("data-selected=\"Home\""));
    assert!(html.contains("Powered by"));
}

#[test]
fn collapsed_sidebar_gives_every_entry_a_tooltip() {
    let html = render(|| view! { <SidebarPanel start_collapsed=true/> });
    // Ten entries plus the collapse control.
    assert_eq!(bubbles(&html), 11);
    assert!(html.contains("Expand sidebar"));
    assert!(html.contains("width: 84px;"));
    assert!(!html.contains("Powered by"));
}

#[test]
fn sidebar_theme_sets_every_tooltip_offset() {
    let theme = ShellTheme { tooltip_offset_px: 30, ..ShellTheme::default() };
    let html = render(move || view! { <SidebarPanel theme=theme start_collapsed=true/> });
    assert_eq!(html.matches("left: calc(100% + 30px);").count(), 11);
    assert!(!html.contains("left: calc(100% + 12px);"));
}

#[test]
fn sidebar_starts_with_both_submenus_closed() {
    let html = render(|| view! { <SidebarPanel/> });
    assert_eq!(html.matches("class=\"sidebar__submenu\"").count(), 2);
    assert_eq!(html.matches("height: 0px; opacity: 0; pointer-events: none;").count(), 2);
    assert_eq!(html.matches("aria-expanded=\"false\"").count(), 2);
    assert!(html.contains("Cohorts"));
    assert!(html.contains("SCORM"));
}

#[test]
fn sidebar_marks_home_as_current_page() {
    let html = render(|| view! { <SidebarPanel/> });
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert!(html.contains("width: 244px;"));
}

// =============================================================
// TopNavBar
// =============================================================

#[test]
fn top_nav_renders_three_controls_without_callbacks() {
    let html = render(|| view! { <TopNavBar/> });
    assert!(html.contains("Exit Admin"));
    assert!(html.contains("aria-label=\"Toggle theme\""));
    assert!(html.contains("aria-label=\"Toggle security panel\""));
}
