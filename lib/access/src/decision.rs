//! Access decision types.
//!
//! A decision is a value, not a side effect. The guard returns it; a thin
//! caller (see [`crate::gate`]) performs whatever navigation it implies.

use std::fmt;

use crate::path::RoutePath;

/// Why a request was denied.
///
/// Denials are never shown to the user; the cause exists for logs and
/// tests. Every cause resolves to a redirect, never an error screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialCause {
    /// No credential stored for the expected role.
    NoCredential,
    /// A credential exists but its role fails the applicable check.
    RoleMismatch,
    /// A credential exists but its stored role label matches no known role.
    UnknownRole,
}

impl DenialCause {
    /// Returns a stable lowercase name for logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoCredential => "no-credential",
            Self::RoleMismatch => "role-mismatch",
            Self::UnknownRole => "unknown-role",
        }
    }
}

impl fmt::Display for DenialCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome of an access check.
///
/// Consumed immediately by the rendering layer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the protected view.
    Allow,
    /// Do not render; navigate (replacing history) to `destination`.
    Redirect {
        /// Where the user should land instead.
        destination: RoutePath,
        /// Why the request was denied.
        cause: DenialCause,
    },
}

impl AccessDecision {
    /// Returns true if the view may render.
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect destination, if the decision is a redirect.
    #[must_use]
    pub fn destination(&self) -> Option<&RoutePath> {
        match self {
            Self::Allow => None,
            Self::Redirect { destination, .. } => Some(destination),
        }
    }

    /// Returns the denial cause, if the decision is a redirect.
    #[must_use]
    pub fn cause(&self) -> Option<DenialCause> {
        match self {
            Self::Allow => None,
            Self::Redirect { cause, .. } => Some(*cause),
        }
    }
}
