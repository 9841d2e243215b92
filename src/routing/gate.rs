//! The route-gate state machine.
//!
//! Four states — Guest, Admin, Expert, StudentOrAnonymous — driven entirely
//! by the resolved identity. Guest is the initial state and the terminal one
//! after logout. Anonymous sessions share the student subtree; an identity
//! the gate cannot place lands in Guest.

use mindmeter_auth::resolve_identity;
use mindmeter_models::{Identity, Role};
use mindmeter_session::Session;

use crate::routing::paths::{
    ADMIN_ROUTES, EXPERT_ROUTES, STUDENT_ROUTES, is_public, matches_route,
};

/// Which route subtree is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteState {
    Guest,
    Admin,
    Expert,
    StudentOrAnonymous,
}

impl RouteState {
    /// Maps a resolved identity onto a route state.
    ///
    /// No identity means Guest; anonymous and student identities share one
    /// state.
    #[must_use]
    pub fn from_identity(identity: Option<&Identity>) -> Self {
        match identity {
            None => Self::Guest,
            Some(identity) => match identity.role {
                Role::Admin => Self::Admin,
                Role::Expert => Self::Expert,
                Role::Student | Role::Anonymous => Self::StudentOrAnonymous,
            },
        }
    }

    /// The state's home path, the target of in-subtree redirects.
    #[must_use]
    pub fn home_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Expert => "/expert/dashboard",
            Self::StudentOrAnonymous | Self::Guest => "/home",
        }
    }

    /// Catch-all redirect target for paths the state cannot serve.
    #[must_use]
    pub fn fallback_path(&self) -> &'static str {
        match self {
            Self::Guest => "/login",
            _ => self.home_path(),
        }
    }

    fn known_routes(&self) -> &'static [&'static str] {
        match self {
            Self::Guest => &[],
            Self::Admin => &ADMIN_ROUTES,
            Self::Expert => &EXPERT_ROUTES,
            Self::StudentOrAnonymous => &STUDENT_ROUTES,
        }
    }
}

/// Outcome of gating a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The path is served as requested.
    Stay,
    /// Replace-navigate to the given path (no history entry).
    Replace(String),
}

/// Decides whether a path is served in the given state.
///
/// Public paths always stay. A path matching one of the state's known routes
/// stays; everything else replaces to the state's fallback.
#[must_use]
pub fn decide(state: RouteState, path: &str) -> RouteDecision {
    if is_public(path) {
        return RouteDecision::Stay;
    }

    if state
        .known_routes()
        .iter()
        .any(|route| matches_route(path, route))
    {
        return RouteDecision::Stay;
    }

    RouteDecision::Replace(state.fallback_path().to_string())
}

/// The route gate: resolves identity fresh on every navigation and applies
/// the pending-test redirect before the normal decision.
#[derive(Clone, Debug)]
pub struct RouteGate {
    session: Session,
}

impl RouteGate {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The current route state.
    #[must_use]
    pub fn state(&self) -> RouteState {
        RouteState::from_identity(resolve_identity(&self.session).as_ref())
    }

    /// Gates a navigation to `path`.
    ///
    /// A pending test type stored before login takes priority: once any
    /// identity (including anonymous) is available it triggers one redirect
    /// to the test page and is consumed, so it fires at most once per
    /// stored value.
    #[must_use]
    pub fn navigate(&self, path: &str) -> RouteDecision {
        let identity = resolve_identity(&self.session);

        if identity.is_some()
            && let Some(test_type) = self.session.take_pending_test()
        {
            return RouteDecision::Replace(format!(
                "/student/test?type={}",
                urlencoding::encode(&test_type)
            ));
        }

        decide(RouteState::from_identity(identity.as_ref()), path)
    }
}
