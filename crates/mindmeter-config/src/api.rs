use std::env;

/// Backend API connection configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `MINDMETER_API_URL`: Base URL of the backend (default: `http://localhost:8080`)
/// - `MINDMETER_HTTP_TIMEOUT`: Request timeout in seconds (default: `30`)
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("MINDMETER_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: env::var("MINDMETER_HTTP_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Builds a full URL for an API path.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = ApiConfig::from_env();
    /// let url = config.url("/api/auth/login");
    /// // Returns "http://localhost:8080/api/auth/login"
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            timeout_secs: 30,
        }
    }
}
