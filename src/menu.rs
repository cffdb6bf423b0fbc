//! Static navigation menu definition for the admin sidebar.
//!
//! DESIGN
//! ======
//! Entries are plain `'static` data so the whole menu is immutable, `Copy`,
//! and serializable. Icons are named by `IconKind` and rendered by variant
//! dispatch in `components::icon`; no entry captures rendering closures.
//!
//! Main and bottom entries share one flat index space: bottom entries are
//! addressed at `main.len() + offset` so the two groups never collide.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use serde::Serialize;

/// Logical icon identifiers understood by the icon renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Home,
    People,
    Content,
    Reports,
    Skills,
    LearningRecords,
    Events,
    Settings,
    Academy,
    Help,
}

/// Second-level item nested under a main entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubMenuEntry {
    pub label: &'static str,
}

/// Top-level navigation item, optionally owning a submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: IconKind,
    pub sub_menu: &'static [SubMenuEntry],
}

impl MenuEntry {
    const fn leaf(label: &'static str, icon: IconKind) -> Self {
        Self { label, icon, sub_menu: &[] }
    }

    const fn parent(label: &'static str, icon: IconKind, sub_menu: &'static [SubMenuEntry]) -> Self {
        Self { label, icon, sub_menu }
    }

    #[must_use]
    pub fn has_sub_menu(&self) -> bool {
        !self.sub_menu.is_empty()
    }
}

/// Which section of the sidebar an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuGroup {
    /// Scrolling top section.
    Main,
    /// Section pinned to the bottom of the panel.
    Bottom,
}

/// A resolved flat index: the entry plus where it lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryRef {
    pub group: MenuGroup,
    /// Position within its own group.
    pub offset: usize,
    pub entry: &'static MenuEntry,
}

impl EntryRef {
    /// Flat selection index of this entry within `menu`.
    #[must_use]
    pub fn index(&self, menu: &NavigationMenu) -> usize {
        match self.group {
            MenuGroup::Main => self.offset,
            MenuGroup::Bottom => menu.bottom_index(self.offset),
        }
    }
}

/// Failure to resolve an index against the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("no menu entry at index {0}")]
    UnknownEntry(usize),
    #[error("menu entry {0} has no submenu")]
    NoSubMenu(usize),
    #[error("menu entry {parent} has no submenu entry {sub}")]
    UnknownSubEntry { parent: usize, sub: usize },
}

/// The two ordered entry groups rendered by the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationMenu {
    pub main: &'static [MenuEntry],
    pub bottom: &'static [MenuEntry],
}

impl NavigationMenu {
    /// Flat selection index of the bottom entry at `offset`.
    #[must_use]
    pub fn bottom_index(&self, offset: usize) -> usize {
        self.main.len() + offset
    }

    /// Total number of addressable entries across both groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.main.len() + self.bottom.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries of one group in display order, each tagged with its offset.
    pub fn group(&self, group: MenuGroup) -> impl Iterator<Item = EntryRef> + use<> {
        let entries: &'static [MenuEntry] = match group {
            MenuGroup::Main => self.main,
            MenuGroup::Bottom => self.bottom,
        };
        entries
            .iter()
            .enumerate()
            .map(move |(offset, entry)| EntryRef { group, offset, entry })
    }

    /// Look up a flat index in either group.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::UnknownEntry`] when `index` is past the bottom group.
    pub fn resolve(&self, index: usize) -> Result<EntryRef, MenuError> {
        let (main, bottom): (&'static [MenuEntry], &'static [MenuEntry]) = (self.main, self.bottom);
        if let Some(entry) = main.get(index) {
            return Ok(EntryRef { group: MenuGroup::Main, offset: index, entry });
        }
        let offset = index - main.len();
        bottom
            .get(offset)
            .map(|entry| EntryRef { group: MenuGroup::Bottom, offset, entry })
            .ok_or(MenuError::UnknownEntry(index))
    }

    /// Look up a submenu entry under the main entry at `parent`.
    ///
    /// # Errors
    ///
    /// Fails when `parent` is not a main entry, owns no submenu, or `sub` is
    /// out of range.
    pub fn resolve_sub(&self, parent: usize, sub: usize) -> Result<&'static SubMenuEntry, MenuError> {
        let main: &'static [MenuEntry] = self.main;
        let entry = main.get(parent).ok_or(MenuError::UnknownEntry(parent))?;
        if !entry.has_sub_menu() {
            return Err(MenuError::NoSubMenu(parent));
        }
        entry
            .sub_menu
            .get(sub)
            .ok_or(MenuError::UnknownSubEntry { parent, sub })
    }
}

const PEOPLE_AND_TEAMS: &[SubMenuEntry] = &[
    SubMenuEntry { label: "People" },
    SubMenuEntry { label: "Teams" },
    SubMenuEntry { label: "Cohorts" },
];

const CONTENT_AND_COURSES: &[SubMenuEntry] = &[
    SubMenuEntry { label: "5Mins Courses" },
    SubMenuEntry { label: "Your lessons" },
    SubMenuEntry { label: "Your Courses" },
    SubMenuEntry { label: "SCORM" },
];

const MAIN_ENTRIES: &[MenuEntry] = &[
    MenuEntry::leaf("Home", IconKind::Home),
    MenuEntry::parent("People & Teams", IconKind::People, PEOPLE_AND_TEAMS),
    MenuEntry::parent("Content & Courses", IconKind::Content, CONTENT_AND_COURSES),
    MenuEntry::leaf("Reports", IconKind::Reports),
    MenuEntry::leaf("Skills", IconKind::Skills),
    MenuEntry::leaf("Learning Records", IconKind::LearningRecords),
    MenuEntry::leaf("Events", IconKind::Events),
    MenuEntry::leaf("Account & Settings", IconKind::Settings),
];

const BOTTOM_ENTRIES: &[MenuEntry] = &[
    MenuEntry::leaf("5Mins Academy", IconKind::Academy),
    MenuEntry::leaf("Help & Support", IconKind::Help),
];

/// The admin shell's navigation menu.
pub const ADMIN_MENU: NavigationMenu = NavigationMenu { main: MAIN_ENTRIES, bottom: BOTTOM_ENTRIES };
