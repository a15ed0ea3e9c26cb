//! Session: facts derived from the current identity at login.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  assessment::{Phase, ResultSummary, Score, TestResult},
  identity::{Identity, Role},
};

/// Score of the onboarding assessment every demo client starts with.
pub const DEMO_ONBOARDING_SCORE: u8 = 45;

/// Whole days between `registered_at` and `now`. Partial days round down and
/// a registration in the future yields 0.
pub fn days_elapsed(registered_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
  let days = (now - registered_at).num_days();
  u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  identity:     Identity,
  days_elapsed: u32,
  results:      Vec<TestResult>,
}

impl Session {
  /// Start a session for `identity`, deriving the elapsed days once.
  ///
  /// Clients are seeded with their onboarding assessment, recorded at the
  /// registration time.
  pub fn start(identity: Identity, now: DateTime<Utc>) -> Self {
    let days_elapsed = days_elapsed(identity.registered_at, now);
    let mut results = Vec::new();
    if identity.role() == Role::Client {
      results.push(TestResult::new(
        identity.id.clone(),
        Phase::Onboarding,
        Score(DEMO_ONBOARDING_SCORE),
        BTreeMap::new(),
        identity.registered_at,
      ));
    }
    Self {
      identity,
      days_elapsed,
      results,
    }
  }

  pub fn identity(&self) -> &Identity { &self.identity }

  pub fn days_elapsed(&self) -> u32 { self.days_elapsed }

  pub fn results(&self) -> &[TestResult] { &self.results }

  pub fn summaries(&self) -> Vec<ResultSummary> {
    self.results.iter().map(TestResult::summary).collect()
  }

  /// Append a result for the current identity and return it.
  pub fn add_result(
    &mut self,
    phase: Phase,
    score: Score,
    responses: BTreeMap<String, serde_json::Value>,
    now: DateTime<Utc>,
  ) -> &TestResult {
    let result = TestResult::new(self.identity.id.clone(), phase, score, responses, now);
    tracing::debug!(phase = phase.ordinal(), score = score.value(), "recorded assessment");
    self.results.push(result);
    &self.results[self.results.len() - 1]
  }
}

#[cfg(test)]
mod tests {
  use chrono::{Duration, TimeZone};

  use super::*;
  use crate::identity::{DEMO_ACCOUNTS, DemoIdentityProvider, IdentityProvider};

  fn now() -> DateTime<Utc> { Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap() }

  #[test]
  fn seven_days_ago_same_time_is_seven() {
    assert_eq!(days_elapsed(now() - Duration::days(7), now()), 7);
  }

  #[test]
  fn partial_days_round_down() {
    let registered = now() - Duration::days(3) - Duration::hours(23);
    assert_eq!(days_elapsed(registered, now()), 3);
    assert_eq!(days_elapsed(now() - Duration::minutes(5), now()), 0);
  }

  #[test]
  fn future_registration_clamps_to_zero() {
    assert_eq!(days_elapsed(now() + Duration::days(2), now()), 0);
  }

  #[test]
  fn client_session_is_seeded_with_onboarding_result() {
    let identity = DemoIdentityProvider.issue(&DEMO_ACCOUNTS[2].request(), now());
    let session = Session::start(identity.clone(), now());
    assert_eq!(session.days_elapsed(), 14);
    assert_eq!(session.results().len(), 1);
    let seeded = &session.results()[0];
    assert_eq!(seeded.phase, Phase::Onboarding);
    assert_eq!(seeded.score.value(), DEMO_ONBOARDING_SCORE);
    assert_eq!(seeded.created_at, identity.registered_at);
    assert_eq!(seeded.user_id, identity.id);
  }

  #[test]
  fn staff_sessions_start_without_results() {
    let identity = DemoIdentityProvider.issue(&DEMO_ACCOUNTS[4].request(), now());
    assert!(Session::start(identity, now()).results().is_empty());
  }

  #[test]
  fn add_result_appends() {
    let identity = DemoIdentityProvider.issue(&DEMO_ACCOUNTS[1].request(), now());
    let mut session = Session::start(identity, now());
    let added = session
      .add_result(Phase::Evolution, Score::new(68).unwrap(), BTreeMap::new(), now())
      .clone();
    assert_eq!(session.results().len(), 2);
    assert_eq!(session.results()[1], added);
    assert_eq!(session.summaries()[1].score.value(), 68);
  }
}
