//! Axum route handlers for the resume API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{resolve_current_user, Identity};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::resume::ResumeData;
use crate::models::user::User;
use crate::resume::prompts::build_improvement_prompt;
use crate::resume::render;
use crate::resume::store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub current: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved: String,
}

/// GET /api/v1/resume
///
/// Returns the saved resume, or the declared-defaults form when none
/// exists yet.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<ResumeData>, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    let row = store::get_resume(&state.db, user.id).await?;

    Ok(Json(row.map(ResumeData::from).unwrap_or_default()))
}

/// POST /api/v1/resume
///
/// Upserts the caller's resume. The combined document is re-rendered from
/// the structured fields so the stored content can never disagree with the
/// entries, and current entries never carry an end date.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    identity: Identity,
    Json(mut data): Json<ResumeData>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    render::normalize_entries(&mut data.experience);
    render::normalize_entries(&mut data.education);
    render::normalize_entries(&mut data.projects);
    data.content = render::combined_content(&data);

    store::upsert_resume(&state.db, user.id, &data).await?;

    info!("Saved resume for user {}", user.id);

    Ok(Json(SaveResumeResponse {
        message: "success".to_string(),
    }))
}

/// POST /api/v1/resume/improve
///
/// Rewrites one entry description through the generation client and returns
/// the improved text. Nothing is persisted.
pub async fn handle_improve(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    let improved = improve_entry_description(state.llm.as_ref(), &user, &request).await?;

    Ok(Json(ImproveResponse { improved }))
}

/// Builds the improvement prompt from the user's industry and returns the
/// generation client's trimmed output unmodified.
pub async fn improve_entry_description(
    llm: &dyn TextGenerator,
    user: &User,
    request: &ImproveRequest,
) -> Result<String, AppError> {
    if request.current.trim().is_empty() {
        return Err(AppError::Validation(
            "current content is required".to_string(),
        ));
    }

    let industry = user.industry.as_deref().unwrap_or_default();
    let prompt = build_improvement_prompt(&request.current, &request.entry_type, industry);

    llm.generate(&prompt)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))
}
