//! Axum route handlers for the profile API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{resolve_current_user, Identity};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;
use crate::users::store;
use crate::users::validation::{parse_skills, validate_onboarding};

#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub industry: String,
    pub sub_industry: String,
    pub experience: i32,
    /// Comma-separated; split and trimmed server-side.
    pub skills: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub is_onboarded: bool,
}

/// POST /api/v1/users/sync
///
/// Get-or-create the caller's user row on first authenticated access.
pub async fn handle_sync(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<SyncRequest>,
) -> Result<Json<User>, AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }

    let user = store::sync_user(&state.db, &identity.0, &request.name, &request.email).await?;

    Ok(Json(user))
}

/// GET /api/v1/users/me
pub async fn handle_me(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<User>, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    Ok(Json(user))
}

/// GET /api/v1/users/onboarding-status
pub async fn handle_onboarding_status(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<OnboardingStatus>, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    Ok(Json(OnboardingStatus {
        is_onboarded: user.is_onboarded(),
    }))
}

/// PUT /api/v1/users/onboarding
///
/// Validates and writes the profile fields collected during onboarding.
pub async fn handle_update_onboarding(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<OnboardingRequest>,
) -> Result<Json<User>, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    validate_onboarding(&request)?;
    let skills = parse_skills(&request.skills);

    let updated = store::update_onboarding(
        &state.db,
        user.id,
        &request.industry,
        &request.sub_industry,
        request.experience,
        &skills,
        request.bio.as_deref(),
    )
    .await?;

    Ok(Json(updated))
}
