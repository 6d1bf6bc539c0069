//! Per-page guard lifecycle and the navigation seam.
//!
//! A protected view does not call the guard directly; it mounts a
//! [`PageGate`]. The gate starts every new location in [`GateState::Checking`],
//! resolves it exactly once, and hands any redirect to a [`Navigator`] at
//! most once per resolution. Re-presenting the same request is idempotent
//! and does not re-enter `Checking`.

use std::sync::{PoisonError, RwLock};

use skillcert_session::TokenStore;

use crate::decision::AccessDecision;
use crate::guard::AccessGuard;
use crate::path::RoutePath;
use crate::request::AccessRequest;

/// Observable gate lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    /// No decision yet for the current location.
    Checking,
    /// The current location has been decided.
    Resolved(AccessDecision),
}

/// Performs the navigation a redirect decision calls for.
///
/// Implementations must *replace* the current history entry rather than
/// push a new one, so the back button never returns to a blocked page.
pub trait Navigator {
    /// Replace the current location with `destination`.
    fn replace(&self, destination: &RoutePath);
}

/// The guard lifecycle for one mounted view.
///
/// Holds the last resolved request so that render loops can call
/// [`resolve`](Self::resolve) every pass without re-evaluating, and tracks
/// whether the resolved redirect has already been applied.
#[derive(Debug)]
pub struct PageGate<S> {
    guard: AccessGuard<S>,
    resolved: Option<(AccessRequest, AccessDecision)>,
    applied: bool,
}

impl<S: TokenStore> PageGate<S> {
    /// Creates a gate around `guard` in the `Checking` state.
    #[must_use]
    pub fn new(guard: AccessGuard<S>) -> Self {
        Self {
            guard,
            resolved: None,
            applied: false,
        }
    }

    /// Returns the underlying guard.
    #[must_use]
    pub fn guard(&self) -> &AccessGuard<S> {
        &self.guard
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GateState {
        match &self.resolved {
            None => GateState::Checking,
            Some((_, decision)) => GateState::Resolved(decision.clone()),
        }
    }

    /// Resolves `request`, evaluating only when the request changed.
    ///
    /// A new or changed request resets the gate to `Checking` and is
    /// decided exactly once; an identical request returns the existing
    /// decision untouched.
    pub fn resolve(&mut self, request: AccessRequest) -> AccessDecision {
        if let Some((current, decision)) = &self.resolved {
            if *current == request {
                return decision.clone();
            }
        }

        self.applied = false;
        let decision = self.guard.evaluate(&request);
        self.resolved = Some((request, decision.clone()));
        decision
    }

    /// Drops the current resolution, returning the gate to `Checking`.
    ///
    /// Call after a store mutation (sign-in, sign-out) so the next
    /// [`resolve`](Self::resolve) re-evaluates even for an unchanged path.
    pub fn reset(&mut self) {
        self.resolved = None;
        self.applied = false;
    }

    /// Applies the resolved decision's side effect, at most once.
    ///
    /// Forwards a redirect destination to `navigator` the first time it is
    /// called after a resolution; later calls, and `Allow` or unresolved
    /// states, do nothing. Returns true if a navigation was issued.
    pub fn apply(&mut self, navigator: &dyn Navigator) -> bool {
        if self.applied {
            return false;
        }
        let Some((_, AccessDecision::Redirect { destination, .. })) = &self.resolved else {
            return false;
        };
        tracing::debug!(destination = %destination, "applying redirect");
        navigator.replace(destination);
        self.applied = true;
        true
    }
}

/// A navigator that records replacements instead of navigating.
///
/// Useful for embedders' tests as well as this crate's own.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    replaced: RwLock<Vec<RoutePath>>,
}

impl RecordingNavigator {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every destination replaced so far, in order.
    #[must_use]
    pub fn replacements(&self) -> Vec<RoutePath> {
        self.replaced
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, destination: &RoutePath) {
        self.replaced
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(destination.clone());
    }
}
