use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

// Dashboard summary counters; defaults to zeros so the read can fail soft
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertDashboard {
    pub assigned_students: i64,
    pub unanswered_questions: i64,
    pub unread_messages: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedStudent {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub last_test_score: Option<i32>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_active: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredAdvice {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub answered_at: Option<DateTime<Utc>>,
}
