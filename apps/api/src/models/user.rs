use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Internal user record. `external_id` is the edge-verified auth subject;
/// profile fields stay NULL until onboarding completes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub email: String,
    pub name: String,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub experience: Option<i32>,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A user counts as onboarded once an industry has been picked.
    pub fn is_onboarded(&self) -> bool {
        self.industry.is_some()
    }
}
