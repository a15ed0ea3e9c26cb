//! Static demo content the dashboards display.
//!
//! Nothing here is persisted. Record lookups are lenient: asking for an id
//! that does not exist yields the first record of the table instead of an
//! error, so a dashboard always has something plausible to show.

use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  assessment::{Phase, ResultSummary, Score, phase_config},
  identity::{Role, ServiceType},
};

// ─── Shapes ──────────────────────────────────────────────────────────────────

/// A `{label, value}` pair consumed by the chart widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
  pub label: String,
  pub value: u64,
}

impl ChartPoint {
  fn new(label: &str, value: u64) -> Self {
    Self {
      label: label.to_string(),
      value,
    }
  }
}

/// One assessment in a patient's evolution history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
  pub phase: Phase,
  pub score: Score,
  /// When it was taken, as shown in the history list.
  pub taken: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
  pub id:           String,
  pub name:         String,
  pub service:      ServiceType,
  pub phase:        Phase,
  pub next_session: Option<String>,
  pub history:      Vec<HistoryEntry>,
}

impl Patient {
  pub fn latest_score(&self) -> Option<Score> { self.history.last().map(|h| h.score) }

  pub fn summaries(&self) -> Vec<ResultSummary> {
    self
      .history
      .iter()
      .map(|h| ResultSummary {
        phase: h.phase,
        score: h.score,
      })
      .collect()
  }

  pub fn chart(&self) -> Vec<ChartPoint> {
    self
      .history
      .iter()
      .map(|h| ChartPoint::new(&format!("P{}", h.phase.ordinal()), u64::from(h.score.value())))
      .collect()
  }
}

/// A row on the administrator's user-management screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
  pub id:     String,
  pub name:   String,
  pub role:   Role,
  pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
  Info,
  Config,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
  pub id:          String,
  pub level:       LogLevel,
  pub title:       String,
  pub description: String,
  pub time:        String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
  pub time:       String,
  pub patient_id: String,
  pub kind:       String,
  pub meet_link:  Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrack {
  pub title:    String,
  pub duration: String,
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

/// Every literal table the dashboards read from.
///
/// The patient table is never empty, which is what makes
/// [`Dataset::patient`] infallible.
#[derive(Debug, Clone)]
pub struct Dataset {
  patients:     Vec<Patient>,
  pub users:    Vec<UserRow>,
  pub logs:     Vec<LogEntry>,
  pub weekly:   Vec<ChartPoint>,
  pub schedule: Vec<Appointment>,
}

impl Default for Dataset {
  fn default() -> Self { Self::demo() }
}

impl Dataset {
  /// The demo content shipped with the portal.
  pub fn demo() -> Self {
    Self {
      patients: demo_patients(),
      users:    demo_users(),
      logs:     demo_logs(),
      weekly:   demo_weekly(),
      schedule: demo_schedule(),
    }
  }

  /// Demo content with a caller-supplied patient table.
  pub fn with_patients(patients: Vec<Patient>) -> Result<Self> {
    if patients.is_empty() {
      return Err(Error::EmptyDataset);
    }
    Ok(Self {
      patients,
      ..Self::demo()
    })
  }

  pub fn patients(&self) -> &[Patient] { &self.patients }

  /// Look up a patient by id. A miss yields the first patient.
  pub fn patient(&self, id: &str) -> &Patient {
    match self.patients.iter().find(|p| p.id == id) {
      Some(patient) => patient,
      None => {
        tracing::debug!(id, "patient not found, falling back to first record");
        &self.patients[0]
      }
    }
  }

  /// Patients ordered by their most recent assessment, best first.
  pub fn recent_results(&self) -> Vec<&Patient> {
    let mut patients: Vec<&Patient> = self.patients.iter().collect();
    patients.sort_by_key(|p| std::cmp::Reverse(p.latest_score()));
    patients
  }

  /// Fuzzy-filter the user table by name or role.
  pub fn search_users(&self, query: &str) -> Vec<&UserRow> {
    if query.is_empty() {
      return self.users.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    self
      .users
      .iter()
      .filter(|u| {
        matcher.fuzzy_match(&u.name, query).is_some()
          || matcher.fuzzy_match(u.role.label(), query).is_some()
      })
      .collect()
  }

  pub fn active_users(&self) -> usize { self.users.iter().filter(|u| u.active).count() }

  pub fn audio_track(&self, phase: Phase) -> AudioTrack {
    AudioTrack {
      title:    phase_config(phase).resources.audio_title.to_string(),
      duration: "08:24".to_string(),
    }
  }
}

// ─── Literal tables ──────────────────────────────────────────────────────────

fn entry(phase: Phase, score: u8, taken: &str) -> HistoryEntry {
  HistoryEntry {
    phase,
    score: Score(score.min(Score::MAX)),
    taken: taken.to_string(),
  }
}

fn demo_patients() -> Vec<Patient> {
  vec![
    Patient {
      id:           "1".into(),
      name:         "María García".into(),
      service:      ServiceType::Calm,
      phase:        Phase::Evolution,
      next_session: Some("Today, 10:00".into()),
      history:      vec![
        entry(Phase::Onboarding, 42, "12 days ago"),
        entry(Phase::Evolution, 61, "3 days ago"),
      ],
    },
    Patient {
      id:           "2".into(),
      name:         "Jorge Ruiz".into(),
      service:      ServiceType::Anguish,
      phase:        Phase::Closure,
      next_session: Some("Today, 12:30".into()),
      history:      vec![
        entry(Phase::Onboarding, 38, "21 days ago"),
        entry(Phase::Evolution, 57, "13 days ago"),
        entry(Phase::Closure, 82, "yesterday"),
      ],
    },
    Patient {
      id:           "3".into(),
      name:         "Lucía Fernández".into(),
      service:      ServiceType::SelfLove,
      phase:        Phase::Onboarding,
      next_session: None,
      history:      vec![entry(Phase::Onboarding, 50, "2 days ago")],
    },
    Patient {
      id:           "4".into(),
      name:         "Andrés Molina".into(),
      service:      ServiceType::Guilt,
      phase:        Phase::Evolution,
      next_session: Some("Tomorrow, 09:00".into()),
      history:      vec![
        entry(Phase::Onboarding, 29, "10 days ago"),
        entry(Phase::Evolution, 44, "today"),
      ],
    },
  ]
}

fn demo_users() -> Vec<UserRow> {
  let row = |id: &str, name: &str, role, active| UserRow {
    id: id.into(),
    name: name.into(),
    role,
    active,
  };
  vec![
    row("u1", "Dr. Alejandro Sanz", Role::Professional, true),
    row("u2", "María García", Role::Client, true),
    row("u3", "Elena Martínez", Role::Coordinator, false),
  ]
}

fn demo_logs() -> Vec<LogEntry> {
  let log = |id: &str, level, title: &str, description: &str, time: &str| LogEntry {
    id: id.into(),
    level,
    title: title.into(),
    description: description.into(),
    time: time.into(),
  };
  vec![
    log(
      "l1",
      LogLevel::Info,
      "Session started",
      "Administrator Laura Méndez signed in to the global panel.",
      "10:42 AM",
    ),
    log(
      "l2",
      LogLevel::Config,
      "Content update",
      "Automatic sync of therapeutic protocols completed.",
      "09:15 AM",
    ),
    log(
      "l3",
      LogLevel::Error,
      "Authentication error",
      "3 failed attempts from IP 192.168.1.45.",
      "08:30 AM",
    ),
  ]
}

fn demo_weekly() -> Vec<ChartPoint> {
  [("Mon", 40), ("Tue", 60), ("Wed", 45), ("Thu", 80), ("Fri", 95)]
    .into_iter()
    .map(|(label, value)| ChartPoint::new(label, value))
    .collect()
}

fn demo_schedule() -> Vec<Appointment> {
  vec![
    Appointment {
      time:       "10:00".into(),
      patient_id: "1".into(),
      kind:       "Evolution follow-up".into(),
      meet_link:  None,
    },
    Appointment {
      time:       "12:30".into(),
      patient_id: "2".into(),
      kind:       "Closure session".into(),
      meet_link:  phase_config(Phase::Closure).resources.meet_link.map(str::to_string),
    },
    Appointment {
      time:       "17:00".into(),
      patient_id: "3".into(),
      kind:       "Onboarding call".into(),
      meet_link:  phase_config(Phase::Onboarding).resources.meet_link.map(str::to_string),
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn patient_lookup_hits_by_id() {
    let data = Dataset::demo();
    assert_eq!(data.patient("3").name, "Lucía Fernández");
  }

  #[test]
  fn patient_lookup_miss_yields_first_record() {
    let data = Dataset::demo();
    assert_eq!(data.patient("does-not-exist").id, "1");
    assert_eq!(data.patient("").id, "1");
  }

  #[test]
  fn empty_patient_table_is_rejected() {
    assert!(matches!(Dataset::with_patients(Vec::new()), Err(Error::EmptyDataset)));
  }

  #[test]
  fn custom_patient_table_falls_back_to_its_own_first() {
    let mut patients = demo_patients();
    patients.reverse();
    let data = Dataset::with_patients(patients).unwrap();
    assert_eq!(data.patient("nope").id, "4");
  }

  #[test]
  fn recent_results_puts_best_score_first() {
    let data = Dataset::demo();
    let ids: Vec<_> = data.recent_results().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["2", "1", "3", "4"]);
  }

  #[test]
  fn user_search_matches_name_and_role() {
    let data = Dataset::demo();
    assert_eq!(data.search_users("").len(), 3);
    let by_name = data.search_users("sanz");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "u1");
    let by_role = data.search_users("coordinator");
    assert!(by_role.iter().any(|u| u.id == "u3"));
  }

  #[test]
  fn weekly_metrics_match_the_ecosystem_chart() {
    let values: Vec<_> = Dataset::demo().weekly.iter().map(|p| p.value).collect();
    assert_eq!(values, [40, 60, 45, 80, 95]);
  }

  #[test]
  fn patient_chart_labels_by_phase() {
    let data = Dataset::demo();
    let chart = data.patient("2").chart();
    assert_eq!(chart.len(), 3);
    assert_eq!(chart[2], ChartPoint::new("P3", 82));
  }
}
