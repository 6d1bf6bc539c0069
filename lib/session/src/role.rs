//! Platform role types.
//!
//! Roles are assigned by the external identity backend at sign-in time and
//! never change for the lifetime of a credential.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a role from a string fails.
///
/// Persisted state can carry labels written by older releases or corrupted
/// externally, so role parsing is fallible everywhere a label crosses the
/// storage boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// The label that did not match any known role.
    pub label: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role label: {}", self.label)
    }
}

impl std::error::Error for ParseRoleError {}

/// A platform user role.
///
/// The platform has three kinds of users:
/// - `Admin`: platform operators managing courses and certificates
/// - `Verifier`: employers reviewing candidate results
/// - `Student`: candidates enrolling in courses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform operator.
    Admin,
    /// Employer reviewing candidate results.
    Verifier,
    /// Candidate enrolled in courses.
    Student,
}

impl Role {
    /// All roles, in canonical order.
    ///
    /// This order is load-bearing: role-agnostic credential lookups scan
    /// slots in exactly this sequence.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Verifier, Role::Student];

    /// Returns the lowercase label used in storage and configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Verifier => "verifier",
            Self::Student => "student",
        }
    }

    /// Returns true if this role has admin privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "verifier" => Ok(Self::Verifier),
            "student" => Ok(Self::Student),
            other => Err(ParseRoleError {
                label: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Verifier.is_admin());
        assert!(!Role::Student.is_admin());
    }

    #[test]
    fn role_labels_round_trip() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().expect("should parse");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn parse_unknown_label() {
        let result: Result<Role, _> = "employer".parse();
        let err = result.expect_err("should not parse");
        assert_eq!(err.label, "employer");
        assert!(err.to_string().contains("employer"));
    }

    #[test]
    fn canonical_order() {
        assert_eq!(Role::ALL, [Role::Admin, Role::Verifier, Role::Student]);
    }

    #[test]
    fn role_serialization_format() {
        let json = serde_json::to_string(&Role::Verifier).expect("serialize");
        assert_eq!(json, "\"verifier\"");

        let json = serde_json::to_string(&Role::Student).expect("serialize");
        assert_eq!(json, "\"student\"");
    }

    #[test]
    fn role_serde_roundtrip() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).expect("serialize");
            let parsed: Role = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
