//! Route table: path-prefix ownership and redirect destinations.
//!
//! The platform's URL space is carved up by role: `/admin/**` belongs to
//! admins, `/employer/**` and `/verifier/**` to verifiers, `/candidate/**`
//! and `/student/**` to students. The route table owns those rules plus the
//! destinations denied requests redirect to.
//!
//! All fields have defaults matching the platform's canonical layout, so a
//! deployment only overrides what it renames.

use serde::{Deserialize, Serialize};
use skillcert_session::Role;

use crate::path::RoutePath;

/// A single path-prefix ownership rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    /// Literal path prefix (e.g. `/admin`).
    pub prefix: String,
    /// The role that owns paths under this prefix.
    pub role: Role,
}

impl PrefixRule {
    /// Creates a rule mapping `prefix` to `role`.
    #[must_use]
    pub fn new(prefix: impl Into<String>, role: Role) -> Self {
        Self {
            prefix: prefix.into(),
            role,
        }
    }
}

/// Redirect destinations keyed by role.
///
/// Student destinations coincide with the destinations for requests with no
/// resolvable role, so both share the fallback slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSet {
    /// Destination for admins.
    pub admin: RoutePath,
    /// Destination for verifiers.
    pub verifier: RoutePath,
    /// Destination for students and for unknown or absent roles.
    pub fallback: RoutePath,
}

impl DestinationSet {
    /// Creates a destination set.
    #[must_use]
    pub fn new(
        admin: impl Into<RoutePath>,
        verifier: impl Into<RoutePath>,
        fallback: impl Into<RoutePath>,
    ) -> Self {
        Self {
            admin: admin.into(),
            verifier: verifier.into(),
            fallback: fallback.into(),
        }
    }

    /// Returns the destination for a role, or the fallback when the role is
    /// absent or student.
    #[must_use]
    pub fn for_role(&self, role: Option<Role>) -> &RoutePath {
        match role {
            Some(Role::Admin) => &self.admin,
            Some(Role::Verifier) => &self.verifier,
            Some(Role::Student) | None => &self.fallback,
        }
    }
}

/// The platform route table.
///
/// Prefix rules are checked in declaration order and the first match wins;
/// the default order puts admin before verifier before student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMap {
    /// Ordered path-prefix ownership rules.
    #[serde(default = "default_prefix_rules")]
    prefixes: Vec<PrefixRule>,

    /// Sign-in pages, used when no credential is stored.
    #[serde(default = "default_sign_in")]
    sign_in: DestinationSet,

    /// Home pages, used when a stored role fails an explicit allow-list.
    #[serde(default = "default_listed_home")]
    listed_home: DestinationSet,

    /// Home pages, used when a stored role contradicts the path's owner.
    #[serde(default = "default_implied_home")]
    implied_home: DestinationSet,
}

fn default_prefix_rules() -> Vec<PrefixRule> {
    vec![
        PrefixRule::new("/admin", Role::Admin),
        PrefixRule::new("/employer", Role::Verifier),
        PrefixRule::new("/verifier", Role::Verifier),
        PrefixRule::new("/candidate", Role::Student),
        PrefixRule::new("/student", Role::Student),
    ]
}

fn default_sign_in() -> DestinationSet {
    DestinationSet::new("/admin", "/employer", "/candidate")
}

fn default_listed_home() -> DestinationSet {
    DestinationSet::new("/admin", "/employer", "/candidate/dashboard")
}

fn default_implied_home() -> DestinationSet {
    DestinationSet::new("/admin", "/employer/dashboard", "/candidate/dashboard")
}

impl Default for RouteMap {
    fn default() -> Self {
        Self {
            prefixes: default_prefix_rules(),
            sign_in: default_sign_in(),
            listed_home: default_listed_home(),
            implied_home: default_implied_home(),
        }
    }
}

impl RouteMap {
    /// Returns the role owning `path`, from the first matching prefix rule.
    #[must_use]
    pub fn role_for_path(&self, path: &RoutePath) -> Option<Role> {
        self.prefixes
            .iter()
            .find(|rule| path.starts_with(&rule.prefix))
            .map(|rule| rule.role)
    }

    /// Returns the sign-in page for a role (fallback when absent).
    #[must_use]
    pub fn sign_in(&self, role: Option<Role>) -> &RoutePath {
        self.sign_in.for_role(role)
    }

    /// Returns the home page used after a failed allow-list check.
    #[must_use]
    pub fn listed_home(&self, role: Option<Role>) -> &RoutePath {
        self.listed_home.for_role(role)
    }

    /// Returns the home page used after a failed path-ownership check.
    #[must_use]
    pub fn implied_home(&self, role: Option<Role>) -> &RoutePath {
        self.implied_home.for_role(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_prefix_resolves_to_admin() {
        let routes = RouteMap::default();
        let role = routes.role_for_path(&RoutePath::new("/admin/courses/123/edit"));
        assert_eq!(role, Some(Role::Admin));
    }

    #[test]
    fn verifier_prefixes_resolve_to_verifier() {
        let routes = RouteMap::default();
        for path in ["/employer/dashboard", "/verifier/results/42"] {
            assert_eq!(
                routes.role_for_path(&RoutePath::new(path)),
                Some(Role::Verifier),
                "path {path}"
            );
        }
    }

    #[test]
    fn student_prefixes_resolve_to_student() {
        let routes = RouteMap::default();
        for path in ["/candidate/courses", "/student/profile"] {
            assert_eq!(
                routes.role_for_path(&RoutePath::new(path)),
                Some(Role::Student),
                "path {path}"
            );
        }
    }

    #[test]
    fn unowned_path_has_no_role() {
        let routes = RouteMap::default();
        assert_eq!(routes.role_for_path(&RoutePath::new("/terms")), None);
        assert_eq!(routes.role_for_path(&RoutePath::new("/")), None);
    }

    #[test]
    fn default_sign_in_destinations() {
        let routes = RouteMap::default();
        assert_eq!(routes.sign_in(Some(Role::Admin)).as_str(), "/admin");
        assert_eq!(routes.sign_in(Some(Role::Verifier)).as_str(), "/employer");
        assert_eq!(routes.sign_in(Some(Role::Student)).as_str(), "/candidate");
        assert_eq!(routes.sign_in(None).as_str(), "/candidate");
    }

    #[test]
    fn default_listed_home_destinations() {
        let routes = RouteMap::default();
        assert_eq!(routes.listed_home(Some(Role::Admin)).as_str(), "/admin");
        assert_eq!(
            routes.listed_home(Some(Role::Verifier)).as_str(),
            "/employer"
        );
        assert_eq!(
            routes.listed_home(Some(Role::Student)).as_str(),
            "/candidate/dashboard"
        );
        assert_eq!(routes.listed_home(None).as_str(), "/candidate/dashboard");
    }

    #[test]
    fn default_implied_home_destinations() {
        let routes = RouteMap::default();
        assert_eq!(routes.implied_home(Some(Role::Admin)).as_str(), "/admin");
        assert_eq!(
            routes.implied_home(Some(Role::Verifier)).as_str(),
            "/employer/dashboard"
        );
        assert_eq!(
            routes.implied_home(Some(Role::Student)).as_str(),
            "/candidate/dashboard"
        );
        assert_eq!(routes.implied_home(None).as_str(), "/candidate/dashboard");
    }

    #[test]
    fn empty_config_equals_default() {
        let parsed: RouteMap = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(parsed, RouteMap::default());
    }

    #[test]
    fn config_can_override_a_destination() {
        let parsed: RouteMap = serde_json::from_str(
            r#"{ "sign_in": { "admin": "/ops", "verifier": "/employer", "fallback": "/candidate" } }"#,
        )
        .expect("deserialize");
        assert_eq!(parsed.sign_in(Some(Role::Admin)).as_str(), "/ops");
        // Untouched tables keep their defaults.
        assert_eq!(parsed.implied_home(None).as_str(), "/candidate/dashboard");
    }

    #[test]
    fn first_matching_rule_wins() {
        let parsed: RouteMap = serde_json::from_str(
            r#"{ "prefixes": [
                { "prefix": "/admin/reports", "role": "verifier" },
                { "prefix": "/admin", "role": "admin" }
            ] }"#,
        )
        .expect("deserialize");
        assert_eq!(
            parsed.role_for_path(&RoutePath::new("/admin/reports/q3")),
            Some(Role::Verifier)
        );
        assert_eq!(
            parsed.role_for_path(&RoutePath::new("/admin/users")),
            Some(Role::Admin)
        );
    }

    #[test]
    fn route_map_serde_roundtrip() {
        let routes = RouteMap::default();
        let json = serde_json::to_string(&routes).expect("serialize");
        let parsed: RouteMap = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(routes, parsed);
    }
}
