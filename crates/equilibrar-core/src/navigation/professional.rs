//! Professional dashboard navigation, shared with coordinators.
//!
//! The Patients tab nests a list/detail drill-down. The drill-down is not
//! remembered across tab switches: Patients is re-entered at the list unless
//! the very action that activates it names a record.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::dataset::Dataset;

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum ProfessionalTab {
  #[default]
  Home,
  Schedule,
  Patients,
  Profile,
  Settings,
}

impl ProfessionalTab {
  pub fn label(self) -> &'static str {
    match self {
      Self::Home => "Home",
      Self::Schedule => "Schedule",
      Self::Patients => "Patients",
      Self::Profile => "Profile",
      Self::Settings => "Settings",
    }
  }
}

/// Secondary selector inside a patient's detail view.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum PatientSubTab {
  History,
  #[default]
  Report,
}

impl PatientSubTab {
  pub fn label(self) -> &'static str {
    match self {
      Self::History => "History",
      Self::Report => "Report",
    }
  }

  pub fn toggle(self) -> Self {
    match self {
      Self::History => Self::Report,
      Self::Report => Self::History,
    }
  }
}

/// Serialize-only: a detail view must be built through
/// [`ProfessionalNavigation::apply`] so its record id is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum PatientsView {
  #[default]
  List,
  Detail {
    record_id: String,
    sub_tab:   PatientSubTab,
  },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfessionalAction {
  SelectTab(ProfessionalTab),
  /// The "view results" shortcut: jump straight into a patient's report.
  ViewResults(String),
  /// Pick a row on the patient list.
  SelectRecord(String),
  SelectSubTab(PatientSubTab),
  Back,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfessionalNavigation {
  pub tab:      ProfessionalTab,
  /// Only meaningful while `tab` is [`ProfessionalTab::Patients`].
  pub patients: PatientsView,
}

impl ProfessionalNavigation {
  /// The record the detail view is showing, if any.
  pub fn selected_record(&self) -> Option<&str> {
    match (&self.tab, &self.patients) {
      (ProfessionalTab::Patients, PatientsView::Detail { record_id, .. }) => Some(record_id),
      _ => None,
    }
  }

  pub fn sub_tab(&self) -> Option<PatientSubTab> {
    match (&self.tab, &self.patients) {
      (ProfessionalTab::Patients, PatientsView::Detail { sub_tab, .. }) => Some(*sub_tab),
      _ => None,
    }
  }

  /// Next state for `action`. Record ids are resolved against `data`, so an
  /// unknown id opens the first patient.
  pub fn apply(&self, action: ProfessionalAction, data: &Dataset) -> Self {
    let detail = |id: &str| PatientsView::Detail {
      record_id: data.patient(id).id.clone(),
      sub_tab:   PatientSubTab::Report,
    };

    match action {
      ProfessionalAction::SelectTab(tab) => Self {
        tab,
        patients: PatientsView::List,
      },
      ProfessionalAction::ViewResults(id) => Self {
        tab:      ProfessionalTab::Patients,
        patients: detail(&id),
      },
      ProfessionalAction::SelectRecord(id) if self.tab == ProfessionalTab::Patients => Self {
        tab:      ProfessionalTab::Patients,
        patients: detail(&id),
      },
      ProfessionalAction::SelectSubTab(sub_tab) => match &self.patients {
        PatientsView::Detail { record_id, .. } if self.tab == ProfessionalTab::Patients => Self {
          tab:      ProfessionalTab::Patients,
          patients: PatientsView::Detail {
            record_id: record_id.clone(),
            sub_tab,
          },
        },
        _ => self.clone(),
      },
      ProfessionalAction::Back if self.selected_record().is_some() => Self {
        tab:      ProfessionalTab::Patients,
        patients: PatientsView::List,
      },
      _ => self.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn data() -> Dataset { Dataset::demo() }

  fn detail(id: &str, sub_tab: PatientSubTab) -> ProfessionalNavigation {
    ProfessionalNavigation {
      tab:      ProfessionalTab::Patients,
      patients: PatientsView::Detail {
        record_id: id.into(),
        sub_tab,
      },
    }
  }

  #[test]
  fn starts_on_home_without_selection() {
    let nav = ProfessionalNavigation::default();
    assert_eq!(nav.tab, ProfessionalTab::Home);
    assert_eq!(nav.selected_record(), None);
  }

  #[test]
  fn view_results_jumps_to_report() {
    let nav = ProfessionalNavigation::default()
      .apply(ProfessionalAction::ViewResults("2".into()), &data());
    assert_eq!(nav.tab, ProfessionalTab::Patients);
    assert_eq!(nav.selected_record(), Some("2"));
    assert_eq!(nav.sub_tab(), Some(PatientSubTab::Report));
  }

  #[test]
  fn selecting_a_record_defaults_to_report() {
    let list = ProfessionalNavigation::default()
      .apply(ProfessionalAction::SelectTab(ProfessionalTab::Patients), &data());
    assert_eq!(list.patients, PatientsView::List);
    let nav = list.apply(ProfessionalAction::SelectRecord("3".into()), &data());
    assert_eq!(nav, detail("3", PatientSubTab::Report));
  }

  #[test]
  fn select_record_outside_patients_is_ignored() {
    let home = ProfessionalNavigation::default();
    assert_eq!(home.apply(ProfessionalAction::SelectRecord("3".into()), &data()), home);
  }

  #[test]
  fn unknown_record_resolves_to_first_patient() {
    let nav = ProfessionalNavigation::default()
      .apply(ProfessionalAction::ViewResults("999".into()), &data());
    assert_eq!(nav.selected_record(), Some("1"));
  }

  #[test]
  fn back_from_detail_clears_selection() {
    let nav = detail("2", PatientSubTab::History).apply(ProfessionalAction::Back, &data());
    assert_eq!(nav.tab, ProfessionalTab::Patients);
    assert_eq!(nav.patients, PatientsView::List);
    assert_eq!(nav.selected_record(), None);
  }

  #[test]
  fn back_on_a_top_level_tab_is_a_no_op() {
    let schedule = ProfessionalNavigation {
      tab:      ProfessionalTab::Schedule,
      patients: PatientsView::List,
    };
    assert_eq!(schedule.apply(ProfessionalAction::Back, &data()), schedule);
  }

  #[test]
  fn sub_tab_switches_only_inside_detail() {
    let nav = detail("1", PatientSubTab::Report)
      .apply(ProfessionalAction::SelectSubTab(PatientSubTab::History), &data());
    assert_eq!(nav.sub_tab(), Some(PatientSubTab::History));
    assert_eq!(nav.selected_record(), Some("1"));

    let list = ProfessionalNavigation {
      tab:      ProfessionalTab::Patients,
      patients: PatientsView::List,
    };
    let unchanged = list.apply(ProfessionalAction::SelectSubTab(PatientSubTab::History), &data());
    assert_eq!(unchanged, list);
  }

  #[test]
  fn leaving_patients_drops_the_drill_down() {
    let nav = detail("2", PatientSubTab::History)
      .apply(ProfessionalAction::SelectTab(ProfessionalTab::Schedule), &data())
      .apply(ProfessionalAction::SelectTab(ProfessionalTab::Patients), &data());
    assert_eq!(nav.patients, PatientsView::List);
    assert_eq!(nav.selected_record(), None);
  }
}
