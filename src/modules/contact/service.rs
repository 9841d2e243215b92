//! Contact form with a client-side cooldown.
//!
//! The cooldown is enforced locally, before any network traffic: the epoch
//! millis of the last successful send are persisted under the
//! `contact_last_sent` slot, and attempts inside the window fail with the
//! remaining wait.

use chrono::Utc;
use tracing::{info, instrument};
use validator::Validate;

use mindmeter_core::{Error, Result};

use crate::client::ApiClient;

use super::model::{ContactRequest, ContactResponse};

pub struct ContactService;

impl ContactService {
    #[instrument(skip_all)]
    pub async fn send(
        client: &ApiClient,
        cooldown_secs: u64,
        dto: ContactRequest,
    ) -> Result<ContactResponse> {
        dto.validate().map_err(Error::validation)?;

        let now_millis = Utc::now().timestamp_millis();
        if let Some(remaining_secs) = remaining_cooldown(
            client.session().contact_last_sent(),
            now_millis,
            cooldown_secs,
        ) {
            return Err(Error::Cooldown { remaining_secs });
        }

        let response: ContactResponse = client.post_json("/api/contact", &dto).await?;

        client.session().set_contact_last_sent(now_millis);
        info!("Contact message sent");

        Ok(response)
    }
}

/// Seconds left in the cooldown window, or `None` if sending is allowed.
///
/// A last-sent timestamp in the future (clock skew, tampered storage)
/// counts as just-sent.
fn remaining_cooldown(
    last_sent_millis: Option<i64>,
    now_millis: i64,
    cooldown_secs: u64,
) -> Option<u64> {
    let last_sent = last_sent_millis?;
    let elapsed_secs = (now_millis.saturating_sub(last_sent) / 1000).max(0) as u64;
    if elapsed_secs < cooldown_secs {
        Some(cooldown_secs - elapsed_secs)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE_MS: i64 = 60_000;

    #[test]
    fn test_no_previous_send_allows() {
        assert_eq!(remaining_cooldown(None, MINUTE_MS, 60), None);
    }

    #[test]
    fn test_inside_window_reports_remaining() {
        // Sent 20s ago with a 60s window: 40s left.
        let now = 100 * MINUTE_MS;
        let last = now - 20_000;
        assert_eq!(remaining_cooldown(Some(last), now, 60), Some(40));
    }

    #[test]
    fn test_after_window_allows() {
        let now = 100 * MINUTE_MS;
        let last = now - 61_000;
        assert_eq!(remaining_cooldown(Some(last), now, 60), None);
    }

    #[test]
    fn test_exactly_at_window_boundary_allows() {
        let now = 100 * MINUTE_MS;
        let last = now - 60_000;
        assert_eq!(remaining_cooldown(Some(last), now, 60), None);
    }

    #[test]
    fn test_future_timestamp_counts_as_just_sent() {
        let now = 100 * MINUTE_MS;
        let last = now + 30_000;
        assert_eq!(remaining_cooldown(Some(last), now, 60), Some(60));
    }
}
