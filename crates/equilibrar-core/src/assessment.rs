//! Wellness assessments and the three-phase programme.
//!
//! A client moves through the programme by time: each phase unlocks a fixed
//! number of days after registration. Assessment results are append-only.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Phase ───────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Phase {
  Onboarding = 1,
  Evolution  = 2,
  Closure    = 3,
}

impl Phase {
  pub fn ordinal(self) -> u8 { self as u8 }

  pub fn next(self) -> Option<Self> {
    match self {
      Self::Onboarding => Some(Self::Evolution),
      Self::Evolution => Some(Self::Closure),
      Self::Closure => None,
    }
  }
}

impl TryFrom<u8> for Phase {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self> {
    match value {
      1 => Ok(Self::Onboarding),
      2 => Ok(Self::Evolution),
      3 => Ok(Self::Closure),
      other => Err(Error::PhaseOutOfRange(other)),
    }
  }
}

impl From<Phase> for u8 {
  fn from(phase: Phase) -> Self { phase.ordinal() }
}

// ─── Score ───────────────────────────────────────────────────────────────────

/// An assessment score, bounded to `0..=100`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(pub(crate) u8);

impl Score {
  pub const MAX: u8 = 100;

  pub fn new(value: u8) -> Result<Self> {
    if value > Self::MAX {
      return Err(Error::ScoreOutOfRange(value));
    }
    Ok(Self(value))
  }

  pub fn value(self) -> u8 { self.0 }
}

impl TryFrom<u8> for Score {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self> { Self::new(value) }
}

impl From<Score> for u8 {
  fn from(score: Score) -> Self { score.0 }
}

// ─── Results ─────────────────────────────────────────────────────────────────

/// A single wellness-assessment data point. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
  pub id:         String,
  pub user_id:    String,
  pub phase:      Phase,
  pub score:      Score,
  /// Free-form questionnaire answers keyed by question id.
  pub responses:  BTreeMap<String, serde_json::Value>,
  pub created_at: DateTime<Utc>,
}

impl TestResult {
  pub fn new(
    user_id: impl Into<String>,
    phase: Phase,
    score: Score,
    responses: BTreeMap<String, serde_json::Value>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      user_id: user_id.into(),
      phase,
      score,
      responses,
      created_at,
    }
  }

  pub fn summary(&self) -> ResultSummary {
    ResultSummary {
      phase: self.phase,
      score: self.score,
    }
  }
}

/// The projection of a result sent to the insight service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
  pub phase: Phase,
  pub score: Score,
}

// ─── Programme ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseResources {
  pub guide_title: &'static str,
  pub audio_title: &'static str,
  pub meet_link:   Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseConfig {
  pub phase:          Phase,
  pub title:          &'static str,
  pub description:    &'static str,
  pub days_to_unlock: u32,
  pub resources:      PhaseResources,
}

pub const PHASES: [PhaseConfig; 3] = [
  PhaseConfig {
    phase:          Phase::Onboarding,
    title:          "Phase 1: Onboarding",
    description:    "The start of your transformation. Initial assessment and welcome resources.",
    days_to_unlock: 0,
    resources:      PhaseResources {
      guide_title: "Interactive Starter Guide",
      audio_title: "Audio 1: Foundations of Calm",
      meet_link:   Some("https://meet.google.com/rfai-onboarding"),
    },
  },
  PhaseConfig {
    phase:          Phase::Evolution,
    title:          "Phase 2: Evolution",
    description:    "Deepening the therapeutic process and a first re-assessment.",
    days_to_unlock: 7,
    resources:      PhaseResources {
      guide_title: "Deepening Guide 2",
      audio_title: "Audio 2: Focused Reprogramming",
      meet_link:   None,
    },
  },
  PhaseConfig {
    phase:          Phase::Closure,
    title:          "Phase 3: Closure and Results",
    description:    "Consolidating achievements and comparing your evolution.",
    days_to_unlock: 14,
    resources:      PhaseResources {
      guide_title: "Maintenance Handbook",
      audio_title: "Audio 3: Towards Autonomy",
      meet_link:   Some("https://meet.google.com/rfai-closure"),
    },
  },
];

pub fn phase_config(phase: Phase) -> &'static PhaseConfig {
  &PHASES[usize::from(phase.ordinal() - 1)]
}

pub fn is_unlocked(phase: Phase, days_elapsed: u32) -> bool {
  days_elapsed >= phase_config(phase).days_to_unlock
}

/// The highest phase unlocked after `days_elapsed` days.
pub fn current_phase(days_elapsed: u32) -> Phase {
  PHASES
    .iter()
    .rev()
    .find(|config| days_elapsed >= config.days_to_unlock)
    .map_or(Phase::Onboarding, |config| config.phase)
}

/// Days until the next phase unlocks, or `None` in the final phase.
pub fn days_until_next_phase(days_elapsed: u32) -> Option<u32> {
  current_phase(days_elapsed)
    .next()
    .map(|next| phase_config(next).days_to_unlock.saturating_sub(days_elapsed))
}
