use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Catalog entry for an available self-assessment test
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSummary {
    #[serde(rename = "type")]
    pub test_type: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub question_count: i64,
}

// A full test with its questions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDetail {
    #[serde(rename = "type")]
    pub test_type: String,
    pub name: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerOption {
    pub value: i32,
    pub label: String,
}

// Submission: one selected option value per question, in order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswersRequest {
    #[serde(rename = "type")]
    pub test_type: String,
    pub answers: Vec<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub test_type: String,
    pub score: i32,
    pub severity: String,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub taken_at: Option<DateTime<Utc>>,
}
