//! Axum route handlers for the cover-letter API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::auth::{resolve_current_user, Identity};
use crate::errors::AppError;
use crate::letters::generator::generate_cover_letter;
use crate::letters::store;
use crate::models::cover_letter::{CoverLetterRequest, CoverLetterRow};
use crate::state::AppState;

/// POST /api/v1/cover-letters
///
/// Full pipeline: resolve user → build prompt → generation call → persist.
pub async fn handle_generate(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<CoverLetterRequest>,
) -> Result<(StatusCode, Json<CoverLetterRow>), AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    let letter = generate_cover_letter(&state.db, state.llm.as_ref(), &user, request).await?;

    Ok((StatusCode::CREATED, Json(letter)))
}

/// GET /api/v1/cover-letters
///
/// Lists the caller's letters, newest first.
pub async fn handle_list(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<CoverLetterRow>>, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    let letters = store::list_cover_letters(&state.db, user.id).await?;

    Ok(Json(letters))
}

/// GET /api/v1/cover-letters/:id
pub async fn handle_get(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverLetterRow>, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    let letter = store::get_cover_letter(&state.db, user.id, id).await?;

    Ok(Json(letter))
}

/// DELETE /api/v1/cover-letters/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let user = resolve_current_user(&state.db, &identity).await?;

    store::delete_cover_letter(&state.db, user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
