//! Roles and per-role credential storage for the skillcert platform.
//!
//! This crate provides:
//! - The platform role enumeration (`Role`)
//! - The stored credential type (`Credential`)
//! - The per-role credential store contract (`TokenStore`) with in-memory
//!   and file-backed implementations
//!
//! # Session Model
//!
//! Each role occupies an independent storage slot, so a person can hold
//! simultaneous sessions for different roles (for example, an admin session
//! and a candidate session in separate browser contexts). Signing in or out
//! of one role never touches another role's slot.
//!
//! Credential storage is best-effort: when the persistence medium is
//! unavailable, reads report "no credential" and writes do nothing. The
//! rest of the platform treats both identically to "not signed in."
//!
//! # Example
//!
//! ```
//! use skillcert_session::{MemoryTokenStore, Role, TokenStore};
//!
//! let store = MemoryTokenStore::new();
//! store.insert(Role::Student, "token-from-sign-in".to_string());
//!
//! assert!(store.contains(Role::Student));
//! assert_eq!(store.stored_role(Role::Student), Some(Role::Student));
//! assert!(!store.contains(Role::Admin));
//!
//! store.remove(Role::Student);
//! assert!(!store.contains(Role::Student));
//! ```

pub mod credential;
pub mod file;
pub mod role;
pub mod store;

// Re-export main types at crate root
pub use credential::Credential;
pub use file::FileTokenStore;
pub use role::{ParseRoleError, Role};
pub use store::{MemoryTokenStore, TokenStore};
