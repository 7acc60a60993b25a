use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted cover letter. Immutable once created, except for owner-scoped
/// deletion. `status` is always "completed" — generation is synchronous, so
/// a row only ever exists in its finished form.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Job parameters submitted to generate a cover letter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
}
