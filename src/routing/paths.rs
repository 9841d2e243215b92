//! The route surface.
//!
//! Public paths are reachable in every route state and never redirected.
//! Each gated subtree carries its known routes; a path that matches none of
//! them falls through to the state's catch-all redirect.

/// Paths reachable without any session.
pub const PUBLIC_PATHS: [&str; 13] = [
    "/",
    "/home",
    "/login",
    "/register",
    "/forgot-password",
    "/privacy-policy",
    "/terms-of-use",
    "/disclaimer",
    "/consult-therapy",
    "/contact",
    "/pricing",
    "/user-guide",
    "/auth/callback",
];

/// Public path prefixes (`/introduce`, `/introduce/experts`, ...).
pub const PUBLIC_PREFIXES: [&str; 1] = ["/introduce"];

/// Known routes in the admin subtree.
pub const ADMIN_ROUTES: [&str; 5] = [
    "/admin/dashboard",
    "/admin/users",
    "/admin/experts",
    "/admin/statistics",
    "/admin/settings",
];

/// Known routes in the expert subtree.
pub const EXPERT_ROUTES: [&str; 5] = [
    "/expert/dashboard",
    "/expert/students",
    "/expert/messages",
    "/expert/advice",
    "/expert/profile",
];

/// Known routes in the student subtree (shared with anonymous sessions).
pub const STUDENT_ROUTES: [&str; 5] = [
    "/student/test",
    "/student/history",
    "/student/results",
    "/student/messages",
    "/student/profile",
];

/// Whether a path is on the public allow-list.
#[must_use]
pub fn is_public(path: &str) -> bool {
    let path = strip_query(path);
    PUBLIC_PATHS.contains(&path)
        || PUBLIC_PREFIXES
            .iter()
            .any(|prefix| matches_route(path, prefix))
}

/// Whether a path matches a route, exactly or as a parent segment
/// (`/admin/users` matches `/admin/users/42`). Query strings are ignored.
#[must_use]
pub fn matches_route(path: &str, route: &str) -> bool {
    let path = strip_query(path);
    path == route || path.strip_prefix(route).is_some_and(|rest| rest.starts_with('/'))
}

fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(p, _)| p)
}
