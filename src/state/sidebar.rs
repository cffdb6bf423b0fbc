//! Sidebar view state: selection, accordion expansion, and collapse.
//!
//! DESIGN
//! ======
//! The panel's whole behaviour is a transition function over
//! `SidebarState` driven by `SidebarEvent`. Components hold the state in a
//! local signal and call `SidebarState::apply` from click handlers; every
//! visual rule is a predicate on the state, so both halves are testable
//! without a UI runtime.
//!
//! Transitions are total. Events naming an index the menu does not have
//! leave the state untouched.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::menu::{EntryRef, MenuError, MenuGroup, NavigationMenu};

/// The single selected entry.
///
/// `main` is a flat index (bottom entries sit at `menu.main.len() + offset`).
/// `sub` is only set when `main` owns a submenu; when `None` the entry at
/// `main` is itself the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub main: usize,
    pub sub: Option<usize>,
}

/// Local state owned by one mounted sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub selection: Selection,
    /// Main entry whose submenu is open. At most one (accordion).
    pub expanded: Option<usize>,
    /// Icon-only narrow mode.
    pub collapsed: bool,
}

/// User interactions the sidebar reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarEvent {
    /// The collapse/expand control.
    ToggleCollapse,
    /// A main-group entry, by position in `menu.main`.
    MainEntry(usize),
    /// A submenu row under the main entry `parent`.
    SubEntry { parent: usize, sub: usize },
    /// A bottom-group entry, by position in `menu.bottom`.
    BottomEntry(usize),
}

impl SidebarEvent {
    /// Click on a main or bottom row, addressed by its offset within its group.
    #[must_use]
    pub fn select(entry: EntryRef) -> Self {
        match entry.group {
            MenuGroup::Main => Self::MainEntry(entry.offset),
            MenuGroup::Bottom => Self::BottomEntry(entry.offset),
        }
    }
}

impl SidebarState {
    /// Compute the state after `event`.
    #[must_use]
    pub fn next(&self, menu: &NavigationMenu, event: SidebarEvent) -> Self {
        let mut next = *self;
        match event {
            SidebarEvent::ToggleCollapse => {
                next.collapsed = !self.collapsed;
                next.expanded = None;
            }
            SidebarEvent::MainEntry(index) => {
                let Some(entry) = menu.main.get(index) else {
                    log::warn!("sidebar: ignoring click on unknown main entry {index}");
                    return next;
                };
                if !entry.has_sub_menu() {
                    next.selection = Selection { main: index, sub: None };
                    next.expanded = None;
                } else if self.collapsed {
                    next.collapsed = false;
                    next.expanded = Some(index);
                } else if self.expanded == Some(index) {
                    next.expanded = None;
                } else {
                    next.expanded = Some(index);
                }
            }
            SidebarEvent::SubEntry { parent, sub } => {
                if let Err(err) = menu.resolve_sub(parent, sub) {
                    log::warn!("sidebar: ignoring submenu click: {err}");
                    return next;
                }
                next.selection = Selection { main: parent, sub: Some(sub) };
            }
            SidebarEvent::BottomEntry(offset) => {
                if offset >= menu.bottom.len() {
                    log::warn!("sidebar: ignoring click on unknown bottom entry {offset}");
                    return next;
                }
                next.selection = Selection { main: menu.bottom_index(offset), sub: None };
            }
        }
        log::debug!("sidebar: {event:?} -> {next:?}");
        next
    }

    /// Apply `event` in place.
    pub fn apply(&mut self, menu: &NavigationMenu, event: SidebarEvent) {
        *self = self.next(menu, event);
    }

    /// Whether the entry at flat `index` is the exact selection.
    ///
    /// A selected submenu row does not make its parent selected.
    #[must_use]
    pub fn is_entry_selected(&self, index: usize) -> bool {
        self.selection.main == index && self.selection.sub.is_none()
    }

    /// Whether submenu row `sub` under `parent` is the exact selection.
    #[must_use]
    pub fn is_sub_selected(&self, parent: usize, sub: usize) -> bool {
        self.selection == Selection { main: parent, sub: Some(sub) }
    }

    /// Whether the submenu under `index` is visually open.
    ///
    /// Collapsed panels never show submenus, whatever `expanded` says.
    #[must_use]
    pub fn is_submenu_open(&self, index: usize) -> bool {
        !self.collapsed && self.expanded == Some(index)
    }

    /// Human-readable path of the current selection, e.g. `People & Teams / People`.
    ///
    /// # Errors
    ///
    /// Fails if the selection no longer exists in `menu`.
    pub fn selected_path(&self, menu: &NavigationMenu) -> Result<String, MenuError> {
        let entry = menu.resolve(self.selection.main)?.entry;
        match self.selection.sub {
            Some(sub) => {
                let child = menu.resolve_sub(self.selection.main, sub)?;
                Ok(format!("{} / {}", entry.label, child.label))
            }
            None => Ok(entry.label.to_owned()),
        }
    }
}
