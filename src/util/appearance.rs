//! Pure style derivation for the sidebar.
//!
//! Each helper maps a piece of `SidebarState` (already reduced to a bool or
//! count by the caller) onto inline CSS, so the rendering rules can be
//! asserted without mounting a component.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

use crate::config::ShellTheme;
use crate::menu::MenuGroup;

/// Icon glyph form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconVariant {
    /// Outlined strokes.
    #[default]
    Linear,
    /// Filled, used for the exact selection.
    Bold,
}

/// Which kind of sidebar row a tone is for. Each group mutes differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Top-level entry in the main group.
    Main,
    /// Submenu row under a main entry. Has no icon.
    Sub,
    /// Entry in the pinned bottom group.
    Bottom,
}

impl From<MenuGroup> for RowKind {
    fn from(group: MenuGroup) -> Self {
        match group {
            MenuGroup::Main => Self::Main,
            MenuGroup::Bottom => Self::Bottom,
        }
    }
}

/// Colors and weight for one entry row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryTone {
    pub label_color: &'static str,
    pub icon_color: &'static str,
    pub icon_variant: IconVariant,
    pub bold: bool,
}

/// Tone of a row of `kind` given whether it is the exact selection.
///
/// Selection looks the same everywhere; only the muted colors differ by kind.
#[must_use]
pub fn entry_tone(theme: &ShellTheme, kind: RowKind, selected: bool) -> EntryTone {
    if selected {
        return EntryTone {
            label_color: theme.accent,
            icon_color: theme.accent,
            icon_variant: IconVariant::Bold,
            bold: true,
        };
    }
    let muted = match kind {
        RowKind::Main => theme.main_muted,
        RowKind::Sub => theme.sub_muted,
        RowKind::Bottom => theme.bottom_muted,
    };
    EntryTone {
        label_color: muted,
        icon_color: muted,
        icon_variant: IconVariant::Linear,
        bold: false,
    }
}

/// Label `style` for an entry tone.
#[must_use]
pub fn tone_style(tone: &EntryTone) -> String {
    let weight = if tone.bold { 700 } else { 400 };
    format!("color: {}; font-weight: {weight};", tone.label_color)
}

/// Panel width in pixels.
#[must_use]
pub fn panel_width(theme: &ShellTheme, collapsed: bool) -> u32 {
    if collapsed { theme.collapsed_width_px } else { theme.expanded_width_px }
}

/// Container `style`: fixed width, background, border, animated width.
#[must_use]
pub fn panel_style(theme: &ShellTheme, collapsed: bool) -> String {
    format!(
        "width: {}px; background: {}; border-right: 1px solid {}; transition: {};",
        panel_width(theme, collapsed),
        theme.background,
        theme.border,
        theme.transition(theme.panel_ms, &["width", "padding"]),
    )
}

/// Opacity fade for text that hides with the panel or its submenu.
///
/// Fading in waits `label_delay_ms`; fading out starts at once.
fn fade(theme: &ShellTheme, visible: bool) -> String {
    let (opacity, events, delay) = if visible { (1, "auto", theme.label_delay_ms) } else { (0, "none", 0) };
    format!(
        "opacity: {opacity}; pointer-events: {events}; transition: {}; transition-delay: {delay}ms;",
        theme.transition(theme.label_ms, &["opacity"]),
    )
}

/// Label container `style` for main and bottom rows.
///
/// Width stays reserved while collapsed; only opacity and pointer events change.
#[must_use]
pub fn label_style(theme: &ShellTheme, collapsed: bool) -> String {
    format!("width: {}px; {}", theme.label_width_px, fade(theme, !collapsed))
}

/// Submenu row text `style`. Visible only while its submenu is open.
#[must_use]
pub fn sub_label_style(theme: &ShellTheme, open: bool) -> String {
    fade(theme, open)
}

/// Height of an open submenu with `rows` entries.
#[must_use]
pub fn submenu_height(theme: &ShellTheme, rows: usize) -> u32 {
    u32::try_from(rows).map_or(u32::MAX, |rows| rows.saturating_mul(theme.submenu_row_height_px))
}

/// Submenu wrapper `style`: animates height and opacity, blocks input while closed.
#[must_use]
pub fn submenu_style(theme: &ShellTheme, open: bool, rows: usize) -> String {
    let (height, opacity, events) = if open { (submenu_height(theme, rows), 1, "auto") } else { (0, 0, "none") };
    format!(
        "height: {height}px; opacity: {opacity}; pointer-events: {events}; overflow: hidden; transition: {};",
        theme.transition(theme.submenu_ms, &["height", "opacity"]),
    )
}

/// Submenu arrow `style`.
#[must_use]
pub fn arrow_style(theme: &ShellTheme, rotated: bool) -> String {
    let degrees = if rotated { 180 } else { 0 };
    format!(
        "color: {}; transform: rotate({degrees}deg); transition: {};",
        theme.main_muted,
        theme.transition(theme.arrow_ms, &["transform"]),
    )
}

/// One half of the collapse control's icon crossfade. Opacity only.
#[must_use]
pub fn crossfade_style(theme: &ShellTheme, visible: bool) -> String {
    let opacity = u8::from(visible);
    format!(
        "opacity: {opacity}; color: {}; transition: {};",
        theme.main_muted,
        theme.transition(theme.crossfade_ms, &["opacity"]),
    )
}

/// "Powered by" caption `style`.
#[must_use]
pub fn footer_caption_style(theme: &ShellTheme) -> String {
    format!("color: {};", theme.sub_muted)
}

/// Vendor mark placeholder `style` under the caption.
#[must_use]
pub fn footer_brand_style(theme: &ShellTheme) -> String {
    format!("background: {};", theme.footer_brand)
}
