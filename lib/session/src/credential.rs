//! Stored credential type.
//!
//! A credential pairs an opaque token issued by the external identity
//! backend with the role label it was issued for. Credentials are created
//! at sign-in and destroyed at sign-out or when a role mismatch forces
//! re-authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A stored sign-in credential.
///
/// The role is kept as the raw label it was stored with rather than the
/// parsed enum. In normal operation the label always matches the slot the
/// credential occupies, but externally-persisted state can drift; keeping
/// the label verbatim lets access checks distinguish "unknown role" from
/// "no credential", which redirect to different destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Opaque token issued by the identity backend.
    token: String,
    /// Role label the credential was stored with.
    #[serde(rename = "role")]
    label: String,
    /// When the credential was stored.
    issued_at: DateTime<Utc>,
}

impl Credential {
    /// Creates a credential for a role, stamped with the current time.
    ///
    /// Use this at sign-in; the label is guaranteed to match `role`.
    #[must_use]
    pub fn issued(token: String, role: Role) -> Self {
        Self {
            token,
            label: role.as_str().to_string(),
            issued_at: Utc::now(),
        }
    }

    /// Creates a credential from raw parts.
    ///
    /// Use this when reconstituting a credential from storage; the label is
    /// taken verbatim and may not match any known role.
    #[must_use]
    pub fn from_parts(token: String, label: String, issued_at: DateTime<Utc>) -> Self {
        Self {
            token,
            label,
            issued_at,
        }
    }

    /// Returns the opaque token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the raw role label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the role the credential was stored for, if the label is a
    /// known role.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.label.parse().ok()
    }

    /// Returns when the credential was stored.
    ///
    /// Informational only; expiry is the identity backend's concern and
    /// never decided locally.
    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}
