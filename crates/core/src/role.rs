use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Permission level carried by a session.
///
/// This is a **closed** set: route restrictions and landing pages are defined
/// over exactly these three values, so adding a role means revisiting the
/// route table as well.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    RestaurantOwner,
    Customer,
}

impl Role {
    /// All roles, in privilege order (broadest first).
    pub const ALL: [Role; 3] = [Role::Admin, Role::RestaurantOwner, Role::Customer];

    /// Canonical wire representation (matches the serde form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::RestaurantOwner => "restaurant-owner",
            Role::Customer => "customer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "restaurant-owner" => Ok(Role::RestaurantOwner),
            "customer" => Ok(Role::Customer),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_round_trips() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Role::RestaurantOwner).unwrap();
        assert_eq!(json, "\"restaurant-owner\"");
    }

    #[test]
    fn unknown_role_rejected() {
        assert!("superuser".parse::<Role>().is_err());
    }
}
