use tracing::instrument;

use mindmeter_core::{Error, Result};
use validator::Validate;

use crate::client::ApiClient;

use super::model::{AdviceAnswer, AskAdviceRequest, AskAdviceResponse};

pub struct AdviceService;

impl AdviceService {
    #[instrument(skip_all)]
    pub async fn ask(client: &ApiClient, dto: AskAdviceRequest) -> Result<AskAdviceResponse> {
        dto.validate().map_err(Error::validation)?;
        client.post_json("/api/advice", &dto).await
    }

    /// Lists published answers. Public; works without a session.
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<AdviceAnswer>> {
        client.get_json("/api/advice").await
    }
}
