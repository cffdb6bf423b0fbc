//! Collapsible sidebar navigation with accordion submenus and a pinned
//! bottom group.
//!
//! ARCHITECTURE
//! ============
//! The panel owns one `RwSignal<SidebarState>` for its lifetime. Every click
//! handler goes through the one `dispatch` callback with a `SidebarEvent`;
//! every class, color, and inline style is derived from the state through
//! `util::appearance`, so the markup carries no logic of its own.
//!
//! Labels keep their reserved width while collapsed and only fade out, so the
//! width transition never reflows text. Tooltips stand in for the hidden
//! labels while collapsed.

use leptos::prelude::*;

use crate::components::icon::{Glyph, glyph, menu_icon};
use crate::components::tooltip::Tooltip;
use crate::config::ShellTheme;
use crate::menu::{ADMIN_MENU, EntryRef, MenuGroup, NavigationMenu};
use crate::state::sidebar::{SidebarEvent, SidebarState};
use crate::util::appearance::{
    RowKind, arrow_style, crossfade_style, entry_tone, footer_brand_style, footer_caption_style, label_style,
    panel_style, sub_label_style, submenu_style, tone_style,
};

const CHEVRON_SIZE_PX: u32 = 16;
const TOGGLE_ICON_SIZE_PX: u32 = 20;

/// Accessible name and tooltip text of the collapse control.
fn toggle_label(collapsed: bool) -> &'static str {
    if collapsed { "Expand sidebar" } else { "Collapse sidebar" }
}

/// Everything a row needs from its panel. `Copy`, so rows capture it freely.
#[derive(Clone, Copy)]
struct RowContext {
    state: RwSignal<SidebarState>,
    collapsed: Signal<bool>,
    dispatch: Callback<SidebarEvent>,
    menu: NavigationMenu,
    theme: ShellTheme,
}

/// Sidebar navigation panel.
///
/// Renders `menu` (the admin menu unless overridden) and keeps selection,
/// submenu expansion, and collapse state locally.
#[component]
pub fn SidebarPanel(
    #[prop(optional)] menu: Option<NavigationMenu>,
    #[prop(optional)] theme: Option<ShellTheme>,
    /// Mount in icon-only mode.
    #[prop(optional)]
    start_collapsed: bool,
) -> impl IntoView {
    let menu = menu.unwrap_or(ADMIN_MENU);
    let theme = theme.unwrap_or_default();
    let state = RwSignal::new(SidebarState { collapsed: start_collapsed, ..SidebarState::default() });

    let collapsed = Signal::derive(move || state.get().collapsed);
    let dispatch = Callback::new(move |event: SidebarEvent| state.update(|s| s.apply(&menu, event)));
    let ctx = RowContext { state, collapsed, dispatch, menu, theme };

    let main_rows = menu.group(MenuGroup::Main).map(|row| entry_row(row, ctx)).collect_view();
    let bottom_rows = menu.group(MenuGroup::Bottom).map(|row| entry_row(row, ctx)).collect_view();
    let toggle_text = Signal::derive(move || toggle_label(collapsed.get()).to_owned());

    view! {
        <nav
            class="sidebar"
            class:sidebar--collapsed=move || collapsed.get()
            style=move || panel_style(&theme, collapsed.get())
            aria-label="Admin navigation"
            data-selected=move || state.get().selected_path(&menu).unwrap_or_default()
        >
            <div class="sidebar__header">
                <Tooltip label=toggle_text offset=theme.tooltip_offset_px>
                    <button
                        class="sidebar__toggle"
                        aria-label=move || toggle_label(collapsed.get())
                        on:click=move |_| dispatch.run(SidebarEvent::ToggleCollapse)
                    >
                        <span class="sidebar__toggle-icon" style=move || crossfade_style(&theme, !collapsed.get())>
                            {glyph(Glyph::SidebarCollapse, TOGGLE_ICON_SIZE_PX)}
                        </span>
                        <span class="sidebar__toggle-icon" style=move || crossfade_style(&theme, collapsed.get())>
                            {glyph(Glyph::SidebarExpand, TOGGLE_ICON_SIZE_PX)}
                        </span>
                    </button>
                </Tooltip>
            </div>

            <ul class="sidebar__main">{main_rows}</ul>
            <ul class="sidebar__bottom">{bottom_rows}</ul>

            <div class="sidebar__footer">
                <Show when=move || !collapsed.get()>
                    <p class="sidebar__footer-caption" style=footer_caption_style(&theme)>"Powered by"</p>
                    <span class="sidebar__footer-brand" style=footer_brand_style(&theme)></span>
                </Show>
            </div>
        </nav>
    }
}

/// One main or bottom row, plus its submenu when a main entry owns one.
fn entry_row(row: EntryRef, ctx: RowContext) -> impl IntoView {
    let RowContext { state, collapsed, dispatch, menu, theme } = ctx;
    let entry = row.entry;
    let index = row.index(&menu);
    let kind = RowKind::from(row.group);
    let has_sub = row.group == MenuGroup::Main && entry.has_sub_menu();

    let selected = Signal::derive(move || state.get().is_entry_selected(index));
    let open = move || state.get().is_submenu_open(index);
    let tone = move || entry_tone(&theme, kind, selected.get());

    let arrow = has_sub.then(|| {
        view! {
            <span class="sidebar__arrow" style=move || arrow_style(&theme, open())>
                {glyph(Glyph::ChevronDown, CHEVRON_SIZE_PX)}
            </span>
        }
    });

    let submenu = has_sub.then(|| {
        let rows = entry
            .sub_menu
            .iter()
            .enumerate()
            .map(|(sub, child)| {
                let sub_selected = move || state.get().is_sub_selected(index, sub);
                view! {
                    <li>
                        <button
                            class="sidebar__sub-entry"
                            class:sidebar__sub-entry--selected=sub_selected
                            style=move || tone_style(&entry_tone(&theme, RowKind::Sub, sub_selected()))
                            aria-current=move || sub_selected().then_some("page")
                            on:click=move |_| dispatch.run(SidebarEvent::SubEntry { parent: index, sub })
                        >
                            <span style=move || sub_label_style(&theme, open())>{child.label}</span>
                        </button>
                    </li>
                }
            })
            .collect_view();
        view! {
            <ul class="sidebar__submenu" style=move || submenu_style(&theme, open(), entry.sub_menu.len())>
                {rows}
            </ul>
        }
    });

    view! {
        <li class="sidebar__item">
            <Tooltip label=entry.label offset=theme.tooltip_offset_px show=collapsed>
                <button
                    class="sidebar__entry"
                    class:sidebar__entry--selected=move || selected.get()
                    aria-current=move || selected.get().then_some("page")
                    aria-expanded=move || has_sub.then(|| if open() { "true" } else { "false" })
                    on:click=move |_| dispatch.run(SidebarEvent::select(row))
                >
                    <span class="sidebar__icon">
                        {move || {
                            let tone = tone();
                            menu_icon(entry.icon, theme.icon_size_px, tone.icon_color, tone.icon_variant)
                        }}
                    </span>
                    <span class="sidebar__label" style=move || label_style(&theme, collapsed.get())>
                        <span style=move || tone_style(&tone())>{entry.label}</span>
                    </span>
                    {arrow}
                </button>
            </Tooltip>
            {submenu}
        </li>
    }
}
