//! Role router: picks the dashboard shape for an identity.

use serde::{Deserialize, Serialize};

use crate::identity::{Identity, Role};

/// One of the role-specific dashboard shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardVariant {
  /// A single static screen with no tab bar.
  Client,
  /// Five tabs with a nested patient drill-down. Coordinators land here too.
  Professional,
  Administrator,
}

/// Total and pure: the variant depends on nothing but the role.
pub fn route(role: Role) -> DashboardVariant {
  match role {
    Role::Client => DashboardVariant::Client,
    Role::Professional | Role::Coordinator => DashboardVariant::Professional,
    Role::Administrator => DashboardVariant::Administrator,
  }
}

pub fn route_identity(identity: &Identity) -> DashboardVariant { route(identity.role()) }

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use strum::IntoEnumIterator;

  use super::*;
  use crate::identity::{DemoIdentityProvider, IdentityProvider, IdentityRequest, ServiceType};

  #[test]
  fn every_role_routes_to_its_variant() {
    assert_eq!(route(Role::Client), DashboardVariant::Client);
    assert_eq!(route(Role::Professional), DashboardVariant::Professional);
    assert_eq!(route(Role::Coordinator), DashboardVariant::Professional);
    assert_eq!(route(Role::Administrator), DashboardVariant::Administrator);
  }

  #[test]
  fn routing_ignores_everything_but_the_role() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    for role in Role::iter() {
      let a = DemoIdentityProvider.issue(
        &IdentityRequest {
          role,
          display_name: "A".into(),
          service: Some(ServiceType::Guilt),
          days_ago: 0,
        },
        now,
      );
      let b = DemoIdentityProvider.issue(
        &IdentityRequest {
          role,
          display_name: "Someone Else".into(),
          service: None,
          days_ago: 30,
        },
        now,
      );
      assert_eq!(route_identity(&a), route_identity(&b));
      assert_eq!(route_identity(&a), route(role));
    }
  }
}
