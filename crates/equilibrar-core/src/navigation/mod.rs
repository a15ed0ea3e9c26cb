//! Per-variant navigation state machines.
//!
//! Each dashboard variant has a closed set of tabs and a pure transition
//! function. Actions that do not apply to the current state leave it as is.

pub mod admin;
pub mod professional;

use serde::Serialize;

pub use admin::{AdminAction, AdminNavigation, AdminTab, BOTTOM_NAV};
pub use professional::{
  PatientSubTab, PatientsView, ProfessionalAction, ProfessionalNavigation, ProfessionalTab,
};

use crate::{dataset::Dataset, router::DashboardVariant};

/// Which screen is visible, owned by the active variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Navigation {
  /// The client variant has a single static screen.
  Client,
  Professional(ProfessionalNavigation),
  Administrator(AdminNavigation),
}

/// A user action addressed to whichever variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
  Professional(ProfessionalAction),
  Admin(AdminAction),
}

impl From<ProfessionalAction> for NavAction {
  fn from(action: ProfessionalAction) -> Self { Self::Professional(action) }
}

impl From<AdminAction> for NavAction {
  fn from(action: AdminAction) -> Self { Self::Admin(action) }
}

impl Navigation {
  /// The default screen on entering `variant`.
  pub fn initial(variant: DashboardVariant) -> Self {
    match variant {
      DashboardVariant::Client => Self::Client,
      DashboardVariant::Professional => Self::Professional(ProfessionalNavigation::default()),
      DashboardVariant::Administrator => Self::Administrator(AdminNavigation::default()),
    }
  }

  pub fn variant(&self) -> DashboardVariant {
    match self {
      Self::Client => DashboardVariant::Client,
      Self::Professional(_) => DashboardVariant::Professional,
      Self::Administrator(_) => DashboardVariant::Administrator,
    }
  }

  /// Next state for `action`. Actions meant for another variant are ignored.
  pub fn apply(&self, action: NavAction, data: &Dataset) -> Self {
    match (self, action) {
      (Self::Professional(nav), NavAction::Professional(action)) => {
        Self::Professional(nav.apply(action, data))
      }
      (Self::Administrator(nav), NavAction::Admin(action)) => Self::Administrator(nav.apply(action)),
      (current, action) => {
        tracing::trace!(?action, variant = ?current.variant(), "action ignored by variant");
        current.clone()
      }
    }
  }

  pub fn selected_record(&self) -> Option<&str> {
    match self {
      Self::Professional(nav) => nav.selected_record(),
      Self::Client | Self::Administrator(_) => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn initial_states_per_variant() {
    assert_eq!(Navigation::initial(DashboardVariant::Client), Navigation::Client);
    assert_eq!(
      Navigation::initial(DashboardVariant::Administrator),
      Navigation::Administrator(AdminNavigation { tab: AdminTab::Profile })
    );
    let Navigation::Professional(nav) = Navigation::initial(DashboardVariant::Professional) else {
      panic!("expected professional navigation");
    };
    assert_eq!(nav.tab, ProfessionalTab::Home);
  }

  #[test]
  fn mismatched_actions_are_ignored() {
    let data = Dataset::demo();
    let client = Navigation::Client;
    assert_eq!(client.apply(AdminAction::Back.into(), &data), client);

    let admin = Navigation::initial(DashboardVariant::Administrator);
    let next = admin.apply(ProfessionalAction::ViewResults("2".into()).into(), &data);
    assert_eq!(next, admin);
  }

  #[test]
  fn serialized_detail_carries_the_resolved_record() {
    let data = Dataset::demo();
    let nav = Navigation::initial(DashboardVariant::Professional)
      .apply(ProfessionalAction::ViewResults("missing".into()).into(), &data);
    let json = serde_json::to_value(&nav).unwrap();
    assert_eq!(json["variant"], "professional");
    assert_eq!(
      json["patients"]["Detail"]["record_id"],
      data.patients()[0].id.as_str()
    );
  }

  #[test]
  fn variant_round_trips() {
    for variant in [
      DashboardVariant::Client,
      DashboardVariant::Professional,
      DashboardVariant::Administrator,
    ] {
      assert_eq!(Navigation::initial(variant).variant(), variant);
    }
  }
}
