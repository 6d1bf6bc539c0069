//! Route guarding and session-routing policy for the skillcert platform.
//!
//! Every protected view passes through one authorization checkpoint before
//! rendering. The checkpoint reads locally stored credentials (see
//! `skillcert-session`), infers which role a location belongs to, and
//! decides between rendering and redirecting:
//!
//! - [`RouteMap`]: which path prefixes belong to which role, and where each
//!   role's sign-in and home pages live
//! - [`AccessGuard`]: the decision function from request to
//!   [`AccessDecision`]
//! - [`PageGate`]: the per-page lifecycle around the guard, plus the
//!   [`Navigator`] seam that performs the actual redirect
//!
//! Decisions are data, not side effects: the guard never navigates, throws,
//! or touches the network. A denied request always resolves to a concrete
//! redirect destination, so the user lands on a sign-in or home page rather
//! than an error screen.
//!
//! # Example
//!
//! ```
//! use skillcert_access::{AccessDecision, AccessGuard, AccessRequest, RouteMap};
//! use skillcert_session::{MemoryTokenStore, Role, TokenStore};
//!
//! let store = MemoryTokenStore::new();
//! store.insert(Role::Admin, "t1".to_string());
//!
//! let guard = AccessGuard::new(store, RouteMap::default());
//!
//! let decision = guard.evaluate(&AccessRequest::new("/admin/courses/123/edit"));
//! assert_eq!(decision, AccessDecision::Allow);
//!
//! let decision = guard.evaluate(&AccessRequest::new("/employer/dashboard"));
//! assert_eq!(decision.destination().map(|d| d.as_str()), Some("/employer"));
//! ```

pub mod decision;
pub mod gate;
pub mod guard;
pub mod path;
pub mod request;
pub mod routes;

// Re-export main types at crate root
pub use decision::{AccessDecision, DenialCause};
pub use gate::{GateState, Navigator, PageGate, RecordingNavigator};
pub use guard::{AccessGuard, expected_role};
pub use path::RoutePath;
pub use request::AccessRequest;
pub use routes::{DestinationSet, PrefixRule, RouteMap};
