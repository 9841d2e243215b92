use tracing::instrument;
use uuid::Uuid;

use mindmeter_core::{Error, Result};

use crate::client::ApiClient;

use super::model::{Message, SendMessageRequest, StudentProfile, TestHistoryEntry, UnreadCount};
use validator::Validate;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(client))]
    pub async fn profile(client: &ApiClient) -> Result<StudentProfile> {
        client.get_json("/api/student/profile").await
    }

    #[instrument(skip(client))]
    pub async fn test_history(client: &ApiClient) -> Result<Vec<TestHistoryEntry>> {
        client.get_json("/api/student/history").await
    }

    #[instrument(skip(client))]
    pub async fn messages(client: &ApiClient, expert_id: Uuid) -> Result<Vec<Message>> {
        client
            .get_json(&format!("/api/student/messages/{expert_id}"))
            .await
    }

    #[instrument(skip_all)]
    pub async fn send_message(
        client: &ApiClient,
        expert_id: Uuid,
        dto: SendMessageRequest,
    ) -> Result<Message> {
        dto.validate().map_err(Error::validation)?;
        client
            .post_json(&format!("/api/student/messages/{expert_id}"), &dto)
            .await
    }

    /// Unread-message count for the badge. Fails soft: any error yields
    /// zero, leaving prior UI state alone.
    pub async fn unread_count(client: &ApiClient) -> UnreadCount {
        client
            .get_json_or_default("/api/student/messages/unread")
            .await
    }
}
