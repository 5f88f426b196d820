use std::collections::BTreeSet;

use leptos::prelude::*;

/// Top-level sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Dashboard,
    Reservations,
    Guests,
    Rooms,
    Services,
    Billing,
    Reports,
    Settings,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Reservations,
        Section::Guests,
        Section::Rooms,
        Section::Services,
        Section::Billing,
        Section::Reports,
        Section::Settings,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Reservations => "reservations",
            Section::Guests => "guests",
            Section::Rooms => "rooms",
            Section::Services => "services",
            Section::Billing => "billing",
            Section::Reports => "reports",
            Section::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Reservations => "Reservations",
            Section::Guests => "Guests",
            Section::Rooms => "Rooms",
            Section::Services => "Services",
            Section::Billing => "Billing",
            Section::Reports => "Reports",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Reservations => "calendar",
            Section::Guests => "users",
            Section::Rooms => "bed",
            Section::Services => "bell-concierge",
            Section::Billing => "invoices",
            Section::Reports => "bar-chart",
            Section::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingsTab {
    General,
    RoomTypes,
    Taxes,
    Users,
    Notifications,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::General,
        SettingsTab::RoomTypes,
        SettingsTab::Taxes,
        SettingsTab::Users,
        SettingsTab::Notifications,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SettingsTab::General => "general",
            SettingsTab::RoomTypes => "room-types",
            SettingsTab::Taxes => "taxes",
            SettingsTab::Users => "users",
            SettingsTab::Notifications => "notifications",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::RoomTypes => "Room Types",
            SettingsTab::Taxes => "Taxes",
            SettingsTab::Users => "Users",
            SettingsTab::Notifications => "Notifications",
        }
    }
}

/// Which section and settings tab are visible, and which have been shown
/// at least once.
///
/// Content is mounted on first activation and then only hidden, so each
/// panel loads once and keeps its filters while the user moves around.
#[derive(Debug, Clone, PartialEq)]
pub struct NavModel {
    active: Section,
    tab: SettingsTab,
    mounted: BTreeSet<Section>,
    mounted_tabs: BTreeSet<SettingsTab>,
}

impl Default for NavModel {
    fn default() -> Self {
        Self {
            active: Section::Dashboard,
            tab: SettingsTab::General,
            mounted: BTreeSet::from([Section::Dashboard]),
            mounted_tabs: BTreeSet::from([SettingsTab::General]),
        }
    }
}

impl NavModel {
    /// Make `section` the only active one. Returns `true` on its first activation.
    pub fn activate(&mut self, section: Section) -> bool {
        self.active = section;
        self.mounted.insert(section)
    }

    /// Make `tab` the only active settings tab. Returns `true` on its first activation.
    pub fn select_tab(&mut self, tab: SettingsTab) -> bool {
        self.tab = tab;
        self.mounted_tabs.insert(tab)
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub fn is_mounted(&self, section: Section) -> bool {
        self.mounted.contains(&section)
    }

    pub fn tab_is_mounted(&self, tab: SettingsTab) -> bool {
        self.mounted_tabs.contains(&tab)
    }
}

/// App-wide navigation context.
#[derive(Clone, Copy)]
pub struct NavState {
    pub model: RwSignal<NavModel>,
    pub left_open: RwSignal<bool>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(NavModel::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, section: Section) {
        let mut first = false;
        self.model.update(|m| first = m.activate(section));
        if first {
            log::debug!("nav: mounting section {}", section.key());
        }
    }

    pub fn select_tab(&self, tab: SettingsTab) {
        let mut first = false;
        self.model.update(|m| first = m.select_tab(tab));
        if first {
            log::debug!("nav: mounting settings tab {}", tab.key());
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.model.with(|m| m.active() == section)
    }

    pub fn is_mounted(&self, section: Section) -> bool {
        self.model.with(|m| m.is_mounted(section))
    }

    pub fn tab_is_active(&self, tab: SettingsTab) -> bool {
        self.model.with(|m| m.tab() == tab)
    }

    pub fn tab_is_mounted(&self, tab: SettingsTab) -> bool {
        self.model.with(|m| m.tab_is_mounted(tab))
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav() -> NavState {
    use_context::<NavState>().expect("NavState context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        let nav = NavModel::default();
        assert_eq!(nav.active(), Section::Dashboard);
        assert!(nav.is_mounted(Section::Dashboard));
        assert!(!nav.is_mounted(Section::Guests));
        assert_eq!(nav.tab(), SettingsTab::General);
    }

    #[test]
    fn test_first_activation_mounts_once() {
        let mut nav = NavModel::default();
        assert!(nav.activate(Section::Guests));
        assert_eq!(nav.active(), Section::Guests);
        assert!(nav.activate(Section::Rooms));
        assert!(!nav.activate(Section::Guests));
        assert!(nav.is_mounted(Section::Rooms));
        assert!(nav.is_mounted(Section::Dashboard));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut nav = NavModel::default();
        nav.activate(Section::Billing);
        let active: Vec<_> = Section::ALL.iter().filter(|s| nav.active() == **s).collect();
        assert_eq!(active, vec![&Section::Billing]);
    }

    #[test]
    fn test_settings_tabs_mount_lazily() {
        let mut nav = NavModel::default();
        assert!(!nav.select_tab(SettingsTab::General));
        assert!(!nav.tab_is_mounted(SettingsTab::Users));
        assert!(nav.select_tab(SettingsTab::Users));
        assert!(!nav.select_tab(SettingsTab::Users));
        assert_eq!(nav.tab(), SettingsTab::Users);
    }
}
