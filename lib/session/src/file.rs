//! File-backed credential store.
//!
//! Persists the role slots as a single JSON document on the client device,
//! mirroring how a browser client keeps per-role tokens in local storage.
//! The document maps role labels to credentials:
//!
//! ```json
//! {
//!   "student": { "token": "…", "role": "student", "issued_at": "…" }
//! }
//! ```
//!
//! The medium is best-effort: a missing, unreadable, or unparseable file
//! opens as an empty store, and failed writes are logged and dropped. No
//! operation ever surfaces an error to callers.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::credential::Credential;
use crate::role::Role;
use crate::store::TokenStore;

/// Credential store persisted to a JSON file.
///
/// The file is read once at open; every mutation rewrites it in full. The
/// document is small (at most one entry per role) so rewriting is cheaper
/// than tracking dirtiness.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    slots: RwLock<HashMap<Role, Credential>>,
}

impl FileTokenStore {
    /// Opens the store at `path`.
    ///
    /// Always succeeds: a missing file yields an empty store, and an
    /// unreadable or malformed file yields an empty store after logging a
    /// warning. Entries under a slot key that is not a known role label are
    /// skipped; entries whose credential carries an unknown role label are
    /// kept verbatim for access checks to classify.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = Self::load(&path);
        Self {
            path,
            slots: RwLock::new(slots),
        }
    }

    /// Returns the path backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> HashMap<Role, Credential> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no credential file, starting empty");
                return HashMap::new();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "credential file unreadable");
                return HashMap::new();
            }
        };

        let entries: HashMap<String, Credential> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "credential file malformed");
                return HashMap::new();
            }
        };

        let mut slots = HashMap::new();
        for (key, credential) in entries {
            match key.parse::<Role>() {
                Ok(slot) => {
                    slots.insert(slot, credential);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unknown slot");
                }
            }
        }
        slots
    }

    fn persist(&self, slots: &HashMap<Role, Credential>) {
        let document: HashMap<&str, &Credential> = slots
            .iter()
            .map(|(slot, credential)| (slot.as_str(), credential))
            .collect();

        let raw = match serde_json::to_string_pretty(&document) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "credential serialization failed");
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, raw) {
            tracing::warn!(path = %self.path.display(), error = %e, "credential file write failed");
        }
    }
}

impl TokenStore for FileTokenStore {
    fn credential(&self, slot: Role) -> Option<Credential> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(&slot).cloned()
    }

    fn insert(&self, slot: Role, token: String) {
        let credential = Credential::issued(token, slot);
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(slot, credential);
        self.persist(&slots);
        tracing::debug!(role = %slot, "credential stored");
    }

    fn restore(&self, slot: Role, credential: Credential) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(slot, credential);
        self.persist(&slots);
    }

    fn remove(&self, slot: Role) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if slots.remove(&slot).is_some() {
            self.persist(&slots);
            tracing::debug!(role = %slot, "credential removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("credentials.json")
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::open(store_path(&dir));

        for role in Role::ALL {
            assert!(!store.contains(role));
        }
    }

    #[test]
    fn garbage_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = store_path(&dir);
        std::fs::write(&path, "not json at all {{{").expect("write");

        let store = FileTokenStore::open(&path);
        assert!(store.any_credential().is_none());
    }

    #[test]
    fn insert_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = store_path(&dir);

        let store = FileTokenStore::open(&path);
        store.insert(Role::Verifier, "tv".to_string());
        drop(store);

        let reopened = FileTokenStore::open(&path);
        assert_eq!(reopened.token(Role::Verifier), Some("tv".to_string()));
        assert_eq!(reopened.stored_role(Role::Verifier), Some(Role::Verifier));
    }

    #[test]
    fn remove_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = store_path(&dir);

        let store = FileTokenStore::open(&path);
        store.insert(Role::Student, "ts".to_string());
        store.remove(Role::Student);
        drop(store);

        let reopened = FileTokenStore::open(&path);
        assert!(!reopened.contains(Role::Student));
    }

    #[test]
    fn unknown_slot_key_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = store_path(&dir);
        let raw = r#"{
            "moderator": { "token": "tm", "role": "moderator", "issued_at": "2026-01-01T00:00:00Z" },
            "admin": { "token": "ta", "role": "admin", "issued_at": "2026-01-01T00:00:00Z" }
        }"#;
        std::fs::write(&path, raw).expect("write");

        let store = FileTokenStore::open(&path);
        assert_eq!(store.token(Role::Admin), Some("ta".to_string()));
        assert!(!store.contains(Role::Verifier));
        assert!(!store.contains(Role::Student));
    }

    #[test]
    fn drifted_label_survives_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = store_path(&dir);

        let store = FileTokenStore::open(&path);
        store.restore(
            Role::Admin,
            Credential::from_parts("t1".to_string(), "student".to_string(), Utc::now()),
        );
        drop(store);

        let reopened = FileTokenStore::open(&path);
        assert_eq!(reopened.token(Role::Admin), Some("t1".to_string()));
        assert_eq!(reopened.stored_role(Role::Admin), Some(Role::Student));
    }

    #[test]
    fn unknown_credential_label_is_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = store_path(&dir);
        let raw = r#"{
            "admin": { "token": "ta", "role": "superuser", "issued_at": "2026-01-01T00:00:00Z" }
        }"#;
        std::fs::write(&path, raw).expect("write");

        let store = FileTokenStore::open(&path);
        // Token present, role unparseable: "unknown role", not "no credential".
        assert!(store.contains(Role::Admin));
        assert_eq!(store.stored_role(Role::Admin), None);
    }

    #[test]
    fn unwritable_path_reads_as_signed_out() {
        let store = FileTokenStore::open("/nonexistent-dir/credentials.json");
        store.insert(Role::Student, "ts".to_string());

        // The write is dropped; in-memory state still serves this process.
        assert!(store.contains(Role::Student));

        let reopened = FileTokenStore::open("/nonexistent-dir/credentials.json");
        assert!(!reopened.contains(Role::Student));
    }
}
