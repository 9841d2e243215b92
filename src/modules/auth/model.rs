use serde::{Deserialize, Serialize};
use validator::Validate;

use mindmeter_models::StoredUser;

// Login request body
#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

// Login / anonymous-start response: credential plus the user record the
// session layer persists verbatim
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: StoredUser,
}

#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Serialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
