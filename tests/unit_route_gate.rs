use std::sync::Arc;

use mindmeter::routing::{RouteDecision, RouteGate, RouteState, decide};
use mindmeter_models::StoredUser;
use mindmeter_session::{MemoryStore, Session};

fn session() -> Session {
    Session::new(Arc::new(MemoryStore::new()))
}

fn login_as(session: &Session, role: &str, email: &str) {
    session.store_login(
        "auth-token",
        &StoredUser {
            email: Some(email.to_string()),
            role: Some(role.to_string()),
            ..Default::default()
        },
    );
}

#[test]
fn test_student_visiting_admin_users_redirects_home() {
    let session = session();
    login_as(&session, "STUDENT", "s@x.com");
    let gate = RouteGate::new(session);

    assert_eq!(
        gate.navigate("/admin/users"),
        RouteDecision::Replace("/home".into())
    );
}

#[test]
fn test_admin_visiting_privacy_policy_stays() {
    let session = session();
    login_as(&session, "ADMIN", "admin@x.com");
    let gate = RouteGate::new(session);

    assert_eq!(gate.navigate("/privacy-policy"), RouteDecision::Stay);
}

#[test]
fn test_guest_visiting_gated_path_redirects_to_login() {
    let gate = RouteGate::new(session());

    assert_eq!(gate.state(), RouteState::Guest);
    assert_eq!(
        gate.navigate("/student/history"),
        RouteDecision::Replace("/login".into())
    );
}

#[test]
fn test_pending_test_redirects_exactly_once_after_login() {
    let session = session();
    session.set_pending_test("PHQ-9");

    // No identity yet: the pending value stays put and guests gate normally.
    let gate = RouteGate::new(session.clone());
    assert_eq!(
        gate.navigate("/student/test"),
        RouteDecision::Replace("/login".into())
    );

    login_as(&session, "STUDENT", "s@x.com");

    // First navigation after login consumes the pending value.
    assert_eq!(
        gate.navigate("/home"),
        RouteDecision::Replace("/student/test?type=PHQ-9".into())
    );

    // Second navigation behaves normally; the value is gone.
    assert_eq!(gate.navigate("/home"), RouteDecision::Stay);
}

#[test]
fn test_pending_test_fires_for_anonymous_identity() {
    let session = session();
    session.set_pending_test("GAD-7");
    session.store_anonymous("anon-token", &StoredUser::default());

    let gate = RouteGate::new(session);
    assert_eq!(
        gate.navigate("/home"),
        RouteDecision::Replace("/student/test?type=GAD-7".into())
    );
}

#[test]
fn test_pending_test_type_is_url_encoded() {
    let session = session();
    session.set_pending_test("PHQ 9+");
    login_as(&session, "STUDENT", "s@x.com");

    let gate = RouteGate::new(session);
    assert_eq!(
        gate.navigate("/home"),
        RouteDecision::Replace("/student/test?type=PHQ%209%2B".into())
    );
}

#[test]
fn test_logout_returns_gate_to_guest() {
    let session = session();
    login_as(&session, "EXPERT", "e@x.com");
    let gate = RouteGate::new(session.clone());
    assert_eq!(gate.state(), RouteState::Expert);

    session.clear_all();

    assert_eq!(gate.state(), RouteState::Guest);
    assert_eq!(
        gate.navigate("/expert/dashboard"),
        RouteDecision::Replace("/login".into())
    );
}

#[test]
fn test_expert_lands_on_own_dashboard_from_foreign_subtree() {
    let session = session();
    login_as(&session, "EXPERT", "e@x.com");
    let gate = RouteGate::new(session);

    assert_eq!(
        gate.navigate("/admin/dashboard"),
        RouteDecision::Replace("/expert/dashboard".into())
    );
    assert_eq!(gate.navigate("/expert/students"), RouteDecision::Stay);
}

#[test]
fn test_unknown_path_inside_own_subtree_replaces_to_home() {
    let session = session();
    login_as(&session, "ADMIN", "a@x.com");
    let gate = RouteGate::new(session);

    assert_eq!(
        gate.navigate("/admin/nonsense"),
        RouteDecision::Replace("/admin/dashboard".into())
    );
}

#[test]
fn test_decide_matrix_for_public_paths() {
    let states = [
        RouteState::Guest,
        RouteState::Admin,
        RouteState::Expert,
        RouteState::StudentOrAnonymous,
    ];
    let public = ["/", "/home", "/pricing", "/introduce/experts", "/user-guide"];

    for state in states {
        for path in public {
            assert_eq!(
                decide(state, path),
                RouteDecision::Stay,
                "state {state:?} path {path}"
            );
        }
    }
}
