use tracing::instrument;
use uuid::Uuid;

use mindmeter_core::{Error, Result};

use crate::client::ApiClient;

use super::model::{SubmitAnswersRequest, TestDetail, TestResult, TestSummary};

pub struct DepressionTestService;

impl DepressionTestService {
    /// Lists the test catalog. Works with and without a session.
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<TestSummary>> {
        client.get_json("/api/depression-test").await
    }

    /// Fetches a test with its questions by type (`PHQ-9`, `GAD-7`, ...).
    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, test_type: &str) -> Result<TestDetail> {
        let path = format!("/api/depression-test/{}", urlencoding::encode(test_type));
        client.get_json(&path).await
    }

    /// Submits answers. Authenticated and anonymous sessions both work; the
    /// backend attributes the result to whichever credential is attached.
    #[instrument(skip_all, fields(test_type = %dto.test_type))]
    pub async fn submit(client: &ApiClient, dto: SubmitAnswersRequest) -> Result<TestResult> {
        if dto.answers.is_empty() {
            return Err(Error::validation("answers must not be empty"));
        }
        client.post_json("/api/depression-test/submit", &dto).await
    }

    #[instrument(skip(client))]
    pub async fn result(client: &ApiClient, id: Uuid) -> Result<TestResult> {
        client
            .get_json(&format!("/api/depression-test/results/{id}"))
            .await
    }
}
