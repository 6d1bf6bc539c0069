//! The authorization checkpoint.
//!
//! [`AccessGuard::evaluate`] is the single function every protected view
//! consults before rendering. It is synchronous and total: it reads only
//! locally stored credentials (verifying the token against the backend is a
//! downstream, asynchronous concern) and every input resolves to exactly
//! one [`AccessDecision`].

use skillcert_session::{Role, TokenStore};

use crate::decision::{AccessDecision, DenialCause};
use crate::path::RoutePath;
use crate::request::AccessRequest;
use crate::routes::RouteMap;

/// The access checkpoint combining a credential store and a route table.
///
/// The guard owns its store; stores use interior locking, so signing in and
/// out through [`store`](Self::store) works from a shared reference.
#[derive(Debug)]
pub struct AccessGuard<S> {
    store: S,
    routes: RouteMap,
}

impl<S: TokenStore> AccessGuard<S> {
    /// Creates a guard over `store` using `routes`.
    #[must_use]
    pub fn new(store: S, routes: RouteMap) -> Self {
        Self { store, routes }
    }

    /// Returns the credential store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the route table.
    #[must_use]
    pub fn routes(&self) -> &RouteMap {
        &self.routes
    }

    /// Decides whether `request` may render or where it redirects.
    ///
    /// The expected role comes from the request's allow-list when one is
    /// declared (first listed role), otherwise from the path's owning
    /// prefix. The credential under that role's slot (or any slot, when no
    /// role is expected) must exist and carry a role that passes the
    /// applicable check; on failure the decision carries the sign-in or
    /// home destination for whichever role was actually found.
    pub fn evaluate(&self, request: &AccessRequest) -> AccessDecision {
        let listed = request.allowed_roles();
        let expected = expected_role(&self.routes, request);

        let credential = match expected {
            Some(role) => self.store.credential(role),
            None => self.store.any_credential(),
        };

        let Some(credential) = credential else {
            return self.deny(
                request,
                self.routes.sign_in(expected).clone(),
                DenialCause::NoCredential,
            );
        };

        let actual = credential.role();

        if !listed.is_empty() {
            match actual {
                Some(role) if listed.contains(&role) => self.allow(request),
                Some(role) => self.deny(
                    request,
                    self.routes.listed_home(Some(role)).clone(),
                    DenialCause::RoleMismatch,
                ),
                None => self.deny(
                    request,
                    self.routes.listed_home(None).clone(),
                    DenialCause::UnknownRole,
                ),
            }
        } else if let Some(expected) = expected {
            match actual {
                Some(role) if role == expected => self.allow(request),
                Some(role) => self.deny(
                    request,
                    self.routes.implied_home(Some(role)).clone(),
                    DenialCause::RoleMismatch,
                ),
                None => self.deny(
                    request,
                    self.routes.implied_home(None).clone(),
                    DenialCause::UnknownRole,
                ),
            }
        } else {
            self.allow(request)
        }
    }

    fn allow(&self, request: &AccessRequest) -> AccessDecision {
        tracing::debug!(path = %request.path(), "access allowed");
        AccessDecision::Allow
    }

    fn deny(
        &self,
        request: &AccessRequest,
        destination: RoutePath,
        cause: DenialCause,
    ) -> AccessDecision {
        tracing::info!(
            path = %request.path(),
            cause = %cause,
            destination = %destination,
            "access denied"
        );
        AccessDecision::Redirect { destination, cause }
    }
}

/// Resolves the expected role for a request against a route table.
///
/// Exposed for callers that need the inference without a full store-backed
/// check (e.g. choosing which sign-in form to preselect).
#[must_use]
pub fn expected_role(routes: &RouteMap, request: &AccessRequest) -> Option<Role> {
    request
        .allowed_roles()
        .first()
        .copied()
        .or_else(|| routes.role_for_path(request.path()))
}
