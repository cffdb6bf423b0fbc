//! Theme colors and layout constants for the admin shell chrome.

// ── Colors ──────────────────────────────────────────────────────

/// Accent used for the selected entry's icon and label.
pub const ACCENT: &str = "#FFBB38";

/// Unselected main-group labels and icons, submenu arrows, collapse glyphs.
pub const MAIN_MUTED: &str = "#bfc2cc";

/// Unselected submenu labels and the footer caption.
pub const SUB_MUTED: &str = "#9ea4b3";

/// Unselected bottom-group labels and icons.
pub const BOTTOM_MUTED: &str = "#9EA4B3";

/// Placeholder swatch for the vendor mark under "Powered by".
pub const FOOTER_BRAND: &str = "#00D3BF";

/// Sidebar and top bar background.
pub const PANEL_BACKGROUND: &str = "#20222A";

/// Divider and outline color.
pub const BORDER: &str = "#383d4c";

// ── Layout ──────────────────────────────────────────────────────

/// Panel width in icon-only mode, in pixels.
pub const COLLAPSED_WIDTH_PX: u32 = 84;

/// Panel width with text labels, in pixels.
pub const EXPANDED_WIDTH_PX: u32 = 244;

/// Fixed width reserved for entry labels so collapse never reflows text.
pub const LABEL_WIDTH_PX: u32 = 120;

/// Height of one submenu row; an open submenu is `rows * SUBMENU_ROW_HEIGHT_PX` tall.
pub const SUBMENU_ROW_HEIGHT_PX: u32 = 40;

/// Gap between a tooltip's target and its floating label.
pub const TOOLTIP_OFFSET_PX: i32 = 12;

/// Glyph size for menu icons.
pub const ICON_SIZE_PX: u32 = 20;

// ── Motion ──────────────────────────────────────────────────────

/// Panel width animation.
pub const PANEL_TRANSITION_MS: u32 = 500;

/// Label fade in and out.
pub const LABEL_TRANSITION_MS: u32 = 200;

/// Labels wait this long before fading in on expand, so they appear once
/// the panel has mostly widened. Fading out is immediate.
pub const LABEL_FADE_DELAY_MS: u32 = 100;

/// Submenu height and opacity animation.
pub const SUBMENU_TRANSITION_MS: u32 = 200;

/// Collapse control glyph crossfade.
pub const CROSSFADE_MS: u32 = 150;

/// Submenu arrow rotation.
pub const ARROW_TRANSITION_MS: u32 = 150;

/// Easing curve shared by every sidebar transition.
pub const TRANSITION_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Bundle of the values above, so views can be rendered against a theme
/// other than the default (tests, previews).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellTheme {
    pub accent: &'static str,
    pub main_muted: &'static str,
    pub sub_muted: &'static str,
    pub bottom_muted: &'static str,
    pub footer_brand: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub collapsed_width_px: u32,
    pub expanded_width_px: u32,
    pub label_width_px: u32,
    pub submenu_row_height_px: u32,
    pub tooltip_offset_px: i32,
    pub icon_size_px: u32,
    pub panel_ms: u32,
    pub label_ms: u32,
    pub label_delay_ms: u32,
    pub submenu_ms: u32,
    pub crossfade_ms: u32,
    pub arrow_ms: u32,
    pub transition_easing: &'static str,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            main_muted: MAIN_MUTED,
            sub_muted: SUB_MUTED,
            bottom_muted: BOTTOM_MUTED,
            footer_brand: FOOTER_BRAND,
            background: PANEL_BACKGROUND,
            border: BORDER,
            collapsed_width_px: COLLAPSED_WIDTH_PX,
            expanded_width_px: EXPANDED_WIDTH_PX,
            label_width_px: LABEL_WIDTH_PX,
            submenu_row_height_px: SUBMENU_ROW_HEIGHT_PX,
            tooltip_offset_px: TOOLTIP_OFFSET_PX,
            icon_size_px: ICON_SIZE_PX,
            panel_ms: PANEL_TRANSITION_MS,
            label_ms: LABEL_TRANSITION_MS,
            label_delay_ms: LABEL_FADE_DELAY_MS,
            submenu_ms: SUBMENU_TRANSITION_MS,
            crossfade_ms: CROSSFADE_MS,
            arrow_ms: ARROW_TRANSITION_MS,
            transition_easing: TRANSITION_EASING,
        }
    }
}

impl ShellTheme {
    /// CSS `transition` value animating `properties` over `duration_ms`.
    #[must_use]
    pub fn transition(&self, duration_ms: u32, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|p| format!("{p} {duration_ms}ms {}", self.transition_easing))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
