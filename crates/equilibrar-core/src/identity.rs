//! Identity: the actor behind a signed-in session.
//!
//! There is no real authentication. Identities are issued by an
//! [`IdentityProvider`]; the demo provider synthesizes them from the fixed
//! login buttons in [`DEMO_ACCOUNTS`].

use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use uuid::Uuid;

use crate::Error;

// ─── Role ────────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
  Client,
  Coordinator,
  Professional,
  Administrator,
}

impl Role {
  /// Human-readable label used on badges and the login buttons.
  pub fn label(self) -> &'static str {
    match self {
      Self::Client => "Client",
      Self::Coordinator => "Coordinator",
      Self::Professional => "Professional",
      Self::Administrator => "Administrator",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.into())
  }
}

impl FromStr for Role {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "client" => Ok(Self::Client),
      "coordinator" => Ok(Self::Coordinator),
      "professional" => Ok(Self::Professional),
      "administrator" | "admin" => Ok(Self::Administrator),
      _ => Err(Error::UnknownRole(s.to_string())),
    }
  }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// The therapeutic programme a client is enrolled in.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
  #[default]
  Calm,
  Anguish,
  SelfLove,
  Guilt,
}

impl ServiceType {
  pub fn label(self) -> &'static str {
    match self {
      Self::Calm => "Calm",
      Self::Anguish => "Anguish",
      Self::SelfLove => "Self-Love",
      Self::Guilt => "Guilt",
    }
  }
}

impl FromStr for ServiceType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
      "calm" => Ok(Self::Calm),
      "anguish" => Ok(Self::Anguish),
      "self_love" => Ok(Self::SelfLove),
      "guilt" => Ok(Self::Guilt),
      _ => Err(Error::UnknownService(s.to_string())),
    }
  }
}

// ─── Identity ────────────────────────────────────────────────────────────────

/// A logged-in actor.
///
/// The role is fixed at issue time and only readable through
/// [`Identity::role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub id:                String,
  pub display_name:      String,
  pub email:             String,
  role:                  Role,
  pub service:           Option<ServiceType>,
  pub registered_at:     DateTime<Utc>,
  pub is_active:         bool,
  pub professional_name: Option<String>,
}

impl Identity {
  pub fn role(&self) -> Role { self.role }

  /// First word of the display name, for greetings.
  pub fn first_name(&self) -> &str {
    self
      .display_name
      .split_whitespace()
      .next()
      .unwrap_or(&self.display_name)
  }
}

// ─── Provider ────────────────────────────────────────────────────────────────

/// What the login surface asks an [`IdentityProvider`] for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRequest {
  pub role:         Role,
  pub display_name: String,
  pub service:      Option<ServiceType>,
  /// Backdate the registration timestamp by this many days.
  pub days_ago:     u32,
}

/// Issues identities. A real deployment would swap this for an
/// authentication backend without touching the navigation machines.
pub trait IdentityProvider {
  fn issue(&self, request: &IdentityRequest, now: DateTime<Utc>) -> Identity;
}

/// Synthesizes identities the way the demo login buttons do.
#[derive(Debug, Clone, Default)]
pub struct DemoIdentityProvider;

impl DemoIdentityProvider {
  pub const EMAIL_DOMAIN: &'static str = "equilibrar.com";
  pub const ASSIGNED_PROFESSIONAL: &'static str = "Dr. Julián Serna";
}

impl IdentityProvider for DemoIdentityProvider {
  fn issue(&self, request: &IdentityRequest, now: DateTime<Utc>) -> Identity {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
    Identity {
      id:                format!("usr_{suffix}"),
      display_name:      request.display_name.clone(),
      email:             format!("{}@{}", request.role, Self::EMAIL_DOMAIN),
      role:              request.role,
      service:           Some(request.service.unwrap_or_default()),
      registered_at:     backdate(now, request.days_ago),
      is_active:         true,
      professional_name: Some(Self::ASSIGNED_PROFESSIONAL.to_string()),
    }
  }
}

/// `now` minus `days`, saturating at the earliest representable instant.
fn backdate(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
  Duration::try_days(i64::from(days))
    .and_then(|offset| now.checked_sub_signed(offset))
    .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

// ─── Demo accounts ───────────────────────────────────────────────────────────

/// One of the fixed demo buttons on the login surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
  pub button:       &'static str,
  pub role:         Role,
  pub display_name: &'static str,
  pub service:      Option<ServiceType>,
  pub days_ago:     u32,
}

impl DemoAccount {
  pub fn request(&self) -> IdentityRequest {
    IdentityRequest {
      role:         self.role,
      display_name: self.display_name.to_string(),
      service:      self.service,
      days_ago:     self.days_ago,
    }
  }
}

pub const DEMO_ACCOUNTS: [DemoAccount; 6] = [
  DemoAccount {
    button:       "Client, day 1",
    role:         Role::Client,
    display_name: "Elena R.",
    service:      Some(ServiceType::Calm),
    days_ago:     0,
  },
  DemoAccount {
    button:       "Client, day 8",
    role:         Role::Client,
    display_name: "Elena R.",
    service:      Some(ServiceType::Calm),
    days_ago:     7,
  },
  DemoAccount {
    button:       "Client, day 15",
    role:         Role::Client,
    display_name: "Elena R.",
    service:      Some(ServiceType::Calm),
    days_ago:     14,
  },
  DemoAccount {
    button:       "Coordinator",
    role:         Role::Coordinator,
    display_name: "Dr. Sandra (Coord)",
    service:      None,
    days_ago:     0,
  },
  DemoAccount {
    button:       "Professional",
    role:         Role::Professional,
    display_name: "Dr. Julián (Prof)",
    service:      None,
    days_ago:     0,
  },
  DemoAccount {
    button:       "Administrator",
    role:         Role::Administrator,
    display_name: "Admin Equilibrar",
    service:      None,
    days_ago:     0,
  },
];
