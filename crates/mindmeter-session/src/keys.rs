//! Session slot keys.
//!
//! Key names match the original web client's local-storage keys exactly, so
//! a session document written by one client version stays readable by the
//! next.

/// Authenticated bearer token.
pub const TOKEN: &str = "token";

/// Authenticated user record (JSON).
pub const USER: &str = "user";

/// Anonymous bearer token, issued by the guest-start flow.
pub const ANONYMOUS_TOKEN: &str = "anonymousToken";

/// Anonymous user record (JSON).
pub const ANONYMOUS_USER: &str = "anonymousUser";

/// UI theme preference.
pub const THEME: &str = "theme";

/// Epoch millis of the last contact-form submission.
pub const CONTACT_LAST_SENT: &str = "contact_last_sent";

/// Test type selected before login; consumed by the route gate.
pub const PENDING_TEST_TYPE: &str = "pendingTestType";

/// Whether the anonymous-session banner has been dismissed.
pub const ANONYMOUS_BANNER_DISMISSED: &str = "anonymousBannerDismissed";

/// The slots removed by a full logout. Preference slots survive.
pub const SESSION_SLOTS: [&str; 4] = [TOKEN, USER, ANONYMOUS_TOKEN, ANONYMOUS_USER];

/// The slots removed when discarding only the anonymous session.
pub const ANONYMOUS_SLOTS: [&str; 2] = [ANONYMOUS_TOKEN, ANONYMOUS_USER];
