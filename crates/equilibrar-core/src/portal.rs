//! The portal's top-level state: who is signed in and what they see.
//!
//! Signing in routes the identity to its dashboard variant and starts that
//! variant's navigation at its default. Signing out (or signing in as
//! someone else) discards everything.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  assessment::{Phase, Score, TestResult},
  dataset::Dataset,
  identity::Identity,
  navigation::{NavAction, Navigation},
  router::{DashboardVariant, route_identity},
  session::Session,
};

// ─── Admin settings ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminToggle {
  MaintenanceMode,
  DebugLogging,
  EmailAlerts,
  PushNotifications,
}

/// Values edited on the administrator's configuration screen. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
  /// Length of the onboarding phase, in weeks (1-8).
  pub phase_one_weeks:    u8,
  /// Therapeutic intensity, in percent (0-100).
  pub intensity:          u8,
  pub maintenance_mode:   bool,
  pub debug_logging:      bool,
  pub email_alerts:       bool,
  pub push_notifications: bool,
}

impl Default for AdminSettings {
  fn default() -> Self {
    Self {
      phase_one_weeks:    4,
      intensity:          85,
      maintenance_mode:   false,
      debug_logging:      true,
      email_alerts:       true,
      push_notifications: false,
    }
  }
}

impl AdminSettings {
  pub const PHASE_WEEKS: std::ops::RangeInclusive<u8> = 1..=8;
  pub const INTENSITY: std::ops::RangeInclusive<u8> = 0..=100;

  pub fn adjust_phase_weeks(&mut self, delta: i16) {
    self.phase_one_weeks = step(self.phase_one_weeks, delta, Self::PHASE_WEEKS);
  }

  pub fn adjust_intensity(&mut self, delta: i16) {
    self.intensity = step(self.intensity, delta, Self::INTENSITY);
  }

  pub fn toggle(&mut self, toggle: AdminToggle) {
    let flag = match toggle {
      AdminToggle::MaintenanceMode => &mut self.maintenance_mode,
      AdminToggle::DebugLogging => &mut self.debug_logging,
      AdminToggle::EmailAlerts => &mut self.email_alerts,
      AdminToggle::PushNotifications => &mut self.push_notifications,
    };
    *flag = !*flag;
  }

  /// Restore factory defaults.
  pub fn reset(&mut self) { *self = Self::default(); }
}

fn step(value: u8, delta: i16, range: std::ops::RangeInclusive<u8>) -> u8 {
  let next = (i16::from(value) + delta).clamp(i16::from(*range.start()), i16::from(*range.end()));
  u8::try_from(next).unwrap_or(*range.start())
}

// ─── Portal ──────────────────────────────────────────────────────────────────

/// Everything that exists only while someone is signed in.
#[derive(Debug, Clone)]
pub struct ActiveSession {
  pub session:        Session,
  pub navigation:     Navigation,
  pub admin_settings: AdminSettings,
}

#[derive(Debug, Clone, Default)]
pub struct Portal {
  active: Option<ActiveSession>,
}

impl Portal {
  pub fn new() -> Self { Self::default() }

  /// Sign `identity` in, replacing any current session.
  pub fn login(&mut self, identity: Identity, now: DateTime<Utc>) {
    let variant = route_identity(&identity);
    tracing::info!(
      role = %identity.role(),
      ?variant,
      user = %identity.id,
      "signed in"
    );
    self.active = Some(ActiveSession {
      session:        Session::start(identity, now),
      navigation:     Navigation::initial(variant),
      admin_settings: AdminSettings::default(),
    });
  }

  pub fn logout(&mut self) {
    if let Some(active) = self.active.take() {
      tracing::info!(user = %active.session.identity().id, "signed out");
    }
  }

  pub fn is_signed_in(&self) -> bool { self.active.is_some() }

  pub fn active(&self) -> Option<&ActiveSession> { self.active.as_ref() }

  pub fn session(&self) -> Option<&Session> { self.active.as_ref().map(|a| &a.session) }

  pub fn identity(&self) -> Option<&Identity> { self.session().map(Session::identity) }

  pub fn navigation(&self) -> Option<&Navigation> {
    self.active.as_ref().map(|a| &a.navigation)
  }

  pub fn variant(&self) -> Option<DashboardVariant> { self.navigation().map(Navigation::variant) }

  /// Days since registration; 0 when nobody is signed in.
  pub fn days_elapsed(&self) -> u32 { self.session().map_or(0, Session::days_elapsed) }

  pub fn admin_settings(&self) -> Option<&AdminSettings> {
    self.active.as_ref().map(|a| &a.admin_settings)
  }

  pub fn admin_settings_mut(&mut self) -> Option<&mut AdminSettings> {
    self.active.as_mut().map(|a| &mut a.admin_settings)
  }

  /// Apply a navigation action. Returns `true` if the visible screen changed.
  pub fn dispatch(&mut self, action: impl Into<NavAction>, data: &Dataset) -> bool {
    let Some(active) = self.active.as_mut() else {
      return false;
    };
    let next = active.navigation.apply(action.into(), data);
    if next == active.navigation {
      return false;
    }
    tracing::debug!(from = ?active.navigation, to = ?next, "navigated");
    active.navigation = next;
    true
  }

  /// Record an assessment for the signed-in identity.
  pub fn add_result(
    &mut self,
    phase: Phase,
    score: Score,
    responses: BTreeMap<String, serde_json::Value>,
    now: DateTime<Utc>,
  ) -> Result<&TestResult> {
    let active = self.active.as_mut().ok_or(Error::SignedOut)?;
    Ok(active.session.add_result(phase, score, responses, now))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn settings_clamp_to_their_ranges() {
    let mut settings = AdminSettings::default();
    settings.adjust_phase_weeks(10);
    assert_eq!(settings.phase_one_weeks, 8);
    settings.adjust_phase_weeks(-20);
    assert_eq!(settings.phase_one_weeks, 1);
    settings.adjust_intensity(30);
    assert_eq!(settings.intensity, 100);
    settings.adjust_intensity(-5);
    assert_eq!(settings.intensity, 95);
  }

  #[test]
  fn settings_toggle_and_reset() {
    let mut settings = AdminSettings::default();
    settings.toggle(AdminToggle::MaintenanceMode);
    settings.adjust_intensity(-40);
    assert!(settings.maintenance_mode);
    settings.reset();
    assert_eq!(settings, AdminSettings::default());
  }

  #[test]
  fn signed_out_portal_has_nothing() {
    let mut portal = Portal::new();
    assert!(!portal.is_signed_in());
    assert_eq!(portal.days_elapsed(), 0);
    assert!(portal.navigation().is_none());
    assert!(!portal.dispatch(crate::navigation::AdminAction::Back, &Dataset::demo()));
    let added = portal.add_result(
      Phase::Onboarding,
      Score::new(10).unwrap(),
      BTreeMap::new(),
      Utc::now(),
    );
    assert!(matches!(added, Err(Error::SignedOut)));
  }
}
