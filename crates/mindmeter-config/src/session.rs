use std::env;
use std::path::PathBuf;

/// Session persistence configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `MINDMETER_SESSION_FILE`: Path to the session document
///   (default: `.mindmeter/session.json`)
/// - `MINDMETER_CONTACT_COOLDOWN`: Seconds between contact-form submissions
///   (default: `60`)
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Path to the JSON document holding persisted session slots.
    pub session_file: PathBuf,

    /// Minimum seconds between contact-form submissions.
    pub contact_cooldown_secs: u64,
}

impl SessionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            session_file: env::var("MINDMETER_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".mindmeter/session.json")),
            contact_cooldown_secs: env::var("MINDMETER_CONTACT_COOLDOWN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from(".mindmeter/session.json"),
            contact_cooldown_secs: 60,
        }
    }
}
