use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}
