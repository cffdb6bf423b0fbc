//! Stylesheet: the page palette has a value for both themes
//!
//! Every `--shell-*` custom property declared on `:root` (light) must be
//! redeclared under `.dark-mode`, otherwise toggling the theme leaves part
//! of the page in the wrong palette.

use std::collections::BTreeSet;
use std::fs;

const STYLESHEET: &str = "style/admin-shell.css";

fn block<'a>(css: &'a str, selector: &str) -> &'a str {
    let start = css
        .find(&format!("{selector} {{"))
        .unwrap_or_else(|| panic!("no `{selector}` block in {STYLESHEET}"));
    let body = &css[start..];
    let end = body.find('}').unwrap_or(body.len());
    &body[..end]
}

fn palette(block: &str) -> BTreeSet<&str> {
    block
        .lines()
        .filter_map(|line| line.trim().strip_prefix("--shell-"))
        .filter_map(|rest| rest.split(':').next())
        .collect()
}

#[test]
fn dark_mode_redeclares_every_light_variable() {
    let css = fs::read_to_string(STYLESHEET).expect("stylesheet readable from crate root");
    let light = palette(block(&css, ":root"));
    let dark = palette(block(&css, ".dark-mode"));
    assert!(light.len() >= 5, "light palette looks truncated: {light:?}");
    assert_eq!(light, dark);
}

#[test]
fn page_and_top_bar_read_the_palette() {
    let css = fs::read_to_string(STYLESHEET).expect("stylesheet readable from crate root");
    assert!(block(&css, ".admin-shell").contains("var(--shell-page)"));
    assert!(block(&css, ".top-nav").contains("var(--shell-bar)"));
}
