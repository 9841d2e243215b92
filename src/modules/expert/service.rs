use tracing::instrument;
use uuid::Uuid;

use mindmeter_core::{Error, Result};
use validator::Validate;

use crate::client::ApiClient;
use crate::modules::student::model::{Message, SendMessageRequest};

use super::model::{AnsweredAdvice, AssignedStudent, ExpertDashboard};

pub struct ExpertService;

impl ExpertService {
    /// Dashboard counters. Fails soft: a failed read renders as zeros
    /// rather than an error.
    pub async fn dashboard(client: &ApiClient) -> ExpertDashboard {
        client.get_json_or_default("/api/expert/dashboard").await
    }

    #[instrument(skip(client))]
    pub async fn assigned_students(client: &ApiClient) -> Result<Vec<AssignedStudent>> {
        client.get_json("/api/expert/students").await
    }

    #[instrument(skip(client))]
    pub async fn messages(client: &ApiClient, student_id: Uuid) -> Result<Vec<Message>> {
        client
            .get_json(&format!("/api/expert/messages/{student_id}"))
            .await
    }

    #[instrument(skip_all)]
    pub async fn send_message(
        client: &ApiClient,
        student_id: Uuid,
        dto: SendMessageRequest,
    ) -> Result<Message> {
        dto.validate().map_err(Error::validation)?;
        client
            .post_json(&format!("/api/expert/messages/{student_id}"), &dto)
            .await
    }

    #[instrument(skip(client))]
    pub async fn answered_advice(client: &ApiClient) -> Result<Vec<AnsweredAdvice>> {
        client.get_json("/api/expert/advice").await
    }
}
