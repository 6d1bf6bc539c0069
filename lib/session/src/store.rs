//! Per-role credential storage.
//!
//! The store is a map from [`Role`] to [`Credential`], one slot per role.
//! Slots are fully independent: signing in or out of one role never touches
//! another role's slot, which is what allows simultaneous sessions for
//! different roles on one device.
//!
//! Storage never surfaces errors. An unavailable or unreadable medium reads
//! as "no credential" and swallows writes; callers must treat that exactly
//! like "not signed in."

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::credential::Credential;
use crate::role::Role;

/// Contract for per-role credential storage.
///
/// Implementations differ only in where the slots live (memory, a file on
/// the client device). All operations are atomic at the granularity of a
/// single slot; no operation performs a read-modify-write across slots.
pub trait TokenStore {
    /// Returns the credential stored for `slot`, if any. No side effects.
    fn credential(&self, slot: Role) -> Option<Credential>;

    /// Stores a fresh credential for `slot`, overwriting any previous one.
    ///
    /// The credential's label is `slot`'s own label and the issue time is
    /// now. Use this at sign-in.
    fn insert(&self, slot: Role, token: String);

    /// Places an externally-sourced credential into `slot` verbatim.
    ///
    /// Unlike [`insert`](Self::insert), the credential's label is kept as
    /// given, drift included. Use this when loading persisted state.
    fn restore(&self, slot: Role, credential: Credential);

    /// Deletes the credential for `slot`. No error if absent.
    fn remove(&self, slot: Role);

    /// Returns the token stored for `slot`, if any.
    fn token(&self, slot: Role) -> Option<String> {
        self.credential(slot).map(|c| c.token().to_string())
    }

    /// Returns the parsed role label actually stored in `slot`.
    ///
    /// `None` when the slot is empty or the stored label matches no known
    /// role; the two cases are distinguished by [`credential`](Self::credential).
    fn stored_role(&self, slot: Role) -> Option<Role> {
        self.credential(slot).and_then(|c| c.role())
    }

    /// Returns true if a credential is stored for `slot`.
    fn contains(&self, slot: Role) -> bool {
        self.credential(slot).is_some()
    }

    /// Returns the first stored credential in [`Role::ALL`] order.
    ///
    /// This is the role-agnostic lookup used for pages with no role-specific
    /// expectation.
    fn any_credential(&self) -> Option<Credential> {
        Role::ALL.iter().find_map(|role| self.credential(*role))
    }
}

/// In-memory credential store.
///
/// The default backend for tests and ephemeral sessions. Interior locking
/// means a shared reference is enough to sign in and out, matching how the
/// file-backed store behaves.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slots: RwLock<HashMap<Role, Credential>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn credential(&self, slot: Role) -> Option<Credential> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(&slot).cloned()
    }

    fn insert(&self, slot: Role, token: String) {
        let credential = Credential::issued(token, slot);
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(slot, credential);
        tracing::debug!(role = %slot, "credential stored");
    }

    fn restore(&self, slot: Role, credential: Credential) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(slot, credential);
    }

    fn remove(&self, slot: Role) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if slots.remove(&slot).is_some() {
            tracing::debug!(role = %slot, "credential removed");
        }
    }
}
