//! Per-render access request.

use skillcert_session::Role;

use crate::path::RoutePath;

/// The inputs to one access check.
///
/// Built fresh for every page render and never persisted. A page that
/// declares an explicit allow-list overrides path-based role inference:
/// the first listed role selects which credential slot is checked, while
/// the full list is what the stored role must belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRequest {
    path: RoutePath,
    allowed_roles: Vec<Role>,
}

impl AccessRequest {
    /// Creates a request for `path` with no explicit allow-list.
    #[must_use]
    pub fn new(path: impl Into<RoutePath>) -> Self {
        Self {
            path: path.into(),
            allowed_roles: Vec::new(),
        }
    }

    /// Sets the explicit allow-list. Order matters: the first role is the
    /// one whose credential slot is consulted.
    #[must_use]
    pub fn with_allowed_roles(mut self, roles: impl Into<Vec<Role>>) -> Self {
        self.allowed_roles = roles.into();
        self
    }

    /// Returns the requested path.
    #[must_use]
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    /// Returns the explicit allow-list; empty means none was declared.
    #[must_use]
    pub fn allowed_roles(&self) -> &[Role] {
        &self.allowed_roles
    }
}
