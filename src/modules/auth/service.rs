use tracing::{debug, info, instrument};
use validator::Validate;

use mindmeter_auth::identity_from_stored;
use mindmeter_core::{Error, Result};
use mindmeter_models::Identity;

use crate::client::ApiClient;

use super::model::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
};

pub struct AuthService;

impl AuthService {
    /// Logs in and persists the authenticated session. The anonymous
    /// session, if any, is discarded: its history belongs to the guest flow.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login(client: &ApiClient, dto: LoginRequest) -> Result<Identity> {
        dto.validate().map_err(Error::validation)?;

        let response: AuthResponse = client.post_json("/api/auth/login", &dto).await?;

        client.session().store_login(&response.token, &response.user);
        client.session().clear_anonymous();
        info!("Logged in");

        Ok(identity_from_stored(&response.user))
    }

    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register(client: &ApiClient, dto: RegisterRequest) -> Result<MessageResponse> {
        dto.validate().map_err(Error::validation)?;
        client.post_json("/api/auth/register", &dto).await
    }

    #[instrument(skip_all)]
    pub async fn forgot_password(
        client: &ApiClient,
        dto: ForgotPasswordRequest,
    ) -> Result<MessageResponse> {
        dto.validate().map_err(Error::validation)?;
        client.post_json("/api/auth/forgot-password", &dto).await
    }

    /// Starts an anonymous guest session and persists it in the anonymous
    /// slots. An existing authenticated session keeps priority.
    #[instrument(skip_all)]
    pub async fn start_anonymous(client: &ApiClient) -> Result<Identity> {
        let response: AuthResponse = client
            .post_json("/api/auth/anonymous", &serde_json::json!({}))
            .await?;

        client
            .session()
            .store_anonymous(&response.token, &response.user);
        info!("Started anonymous session");

        Ok(identity_from_stored(&response.user))
    }

    /// Logs out: notifies the backend on a best-effort basis, then clears
    /// every session slot regardless of the outcome.
    #[instrument(skip_all)]
    pub async fn logout(client: &ApiClient) {
        if let Err(e) = client.post_empty("/api/auth/logout").await {
            // A 401 here already cleared the session; anything else is moot.
            debug!(error = %e, "Logout notification failed");
        }
        client.session().clear_all();
        info!("Logged out");
    }
}
