//! Administrator dashboard navigation.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum AdminTab {
  #[default]
  Profile,
  Users,
  Logs,
  Config,
  System,
  Home,
}

impl AdminTab {
  pub fn title(self) -> &'static str {
    match self {
      Self::Profile => "Administrator Profile",
      Self::Users => "User Management",
      Self::Logs => "System Logs",
      Self::Config => "Global Configuration",
      Self::System => "Audit & Maintenance",
      Self::Home => "Ecosystem Health",
    }
  }

  /// Whether the persistent bottom bar exposes this tab.
  pub fn in_bottom_nav(self) -> bool { BOTTOM_NAV.contains(&self) }
}

/// The tabs on the persistent bottom bar, in display order.
pub const BOTTOM_NAV: [AdminTab; 4] =
  [AdminTab::Home, AdminTab::Users, AdminTab::Logs, AdminTab::Config];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
  /// Press a bottom-bar button.
  BottomNav(AdminTab),
  /// Follow an in-content link (profile menu entries, system shortcuts).
  Open(AdminTab),
  /// The back control in a screen header.
  Back,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminNavigation {
  pub tab: AdminTab,
}

impl AdminNavigation {
  /// Next state for `action`; disallowed actions leave the state unchanged.
  pub fn apply(self, action: AdminAction) -> Self {
    use AdminTab::*;

    let next = match (self.tab, action) {
      (_, AdminAction::BottomNav(tab)) if tab.in_bottom_nav() => tab,
      (Profile, AdminAction::Open(tab @ (Users | Logs | Config | System))) => tab,
      (System, AdminAction::Open(tab @ (Home | Profile))) => tab,
      (Users | Logs | Config | System, AdminAction::Back) => Profile,
      (current, _) => current,
    };
    Self { tab: next }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  fn at(tab: AdminTab) -> AdminNavigation { AdminNavigation { tab } }

  #[test]
  fn starts_on_profile() {
    assert_eq!(AdminNavigation::default().tab, AdminTab::Profile);
  }

  #[test]
  fn bottom_bar_exposes_four_tabs() {
    let exposed: Vec<_> = AdminTab::iter().filter(|t| t.in_bottom_nav()).collect();
    assert_eq!(exposed.len(), 4);
    assert_eq!(BOTTOM_NAV[0], AdminTab::Home);
  }

  #[test]
  fn bottom_bar_cannot_reach_profile_or_system() {
    let nav = at(AdminTab::Home);
    assert_eq!(nav.apply(AdminAction::BottomNav(AdminTab::System)), nav);
    assert_eq!(nav.apply(AdminAction::BottomNav(AdminTab::Profile)), nav);
  }

  #[test]
  fn system_is_only_reachable_from_profile() {
    for tab in AdminTab::iter().filter(|t| !matches!(t, AdminTab::Profile | AdminTab::System)) {
      let next = at(tab).apply(AdminAction::Open(AdminTab::System));
      assert_eq!(next, at(tab), "reached System from {tab:?}");
    }
    let system = at(AdminTab::System);
    assert_eq!(system.apply(AdminAction::Open(AdminTab::System)), system);
    let next = at(AdminTab::Profile).apply(AdminAction::Open(AdminTab::System));
    assert_eq!(next.tab, AdminTab::System);
  }

  #[test]
  fn every_tab_is_reachable_from_profile() {
    let profile = at(AdminTab::Profile);
    for tab in [AdminTab::Users, AdminTab::Logs, AdminTab::Config, AdminTab::System] {
      assert_eq!(profile.apply(AdminAction::Open(tab)).tab, tab);
    }
    let home = profile.apply(AdminAction::BottomNav(AdminTab::Home));
    assert_eq!(home.tab, AdminTab::Home);
  }

  #[test]
  fn back_returns_to_profile_from_sub_screens() {
    for tab in [AdminTab::Users, AdminTab::Logs, AdminTab::Config, AdminTab::System] {
      assert_eq!(at(tab).apply(AdminAction::Back).tab, AdminTab::Profile);
    }
    assert_eq!(at(AdminTab::Home).apply(AdminAction::Back).tab, AdminTab::Home);
    assert_eq!(at(AdminTab::Profile).apply(AdminAction::Back).tab, AdminTab::Profile);
  }

  #[test]
  fn system_shortcuts_lead_home_and_back_to_profile() {
    let system = at(AdminTab::System);
    assert_eq!(system.apply(AdminAction::Open(AdminTab::Home)).tab, AdminTab::Home);
    assert_eq!(system.apply(AdminAction::Open(AdminTab::Profile)).tab, AdminTab::Profile);
  }
}
