use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Publicly ask a question; no session required
#[derive(Debug, Serialize, Validate)]
pub struct AskAdviceRequest {
    #[validate(length(min = 10, message = "question is too short"))]
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct AskAdviceResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceAnswer {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub expert_name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub published_at: Option<DateTime<Utc>>,
}
