//! Owner-scoped persistence for cover letters. Every query filters on the
//! owning user's internal id — there is no unscoped access path.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cover_letter::{CoverLetterRequest, CoverLetterRow};

/// Status tag stored on every letter. Generation is synchronous, so no
/// other value is ever observable.
pub const STATUS_COMPLETED: &str = "completed";

/// Inserts a freshly generated letter and returns the stored row.
pub async fn insert_cover_letter(
    pool: &PgPool,
    user_id: Uuid,
    request: &CoverLetterRequest,
    content: &str,
) -> Result<CoverLetterRow, AppError> {
    Ok(sqlx::query_as::<_, CoverLetterRow>(
        r#"
        INSERT INTO cover_letters
            (id, user_id, content, job_title, company_name, job_description, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(content)
    .bind(&request.job_title)
    .bind(&request.company_name)
    .bind(&request.job_description)
    .bind(STATUS_COMPLETED)
    .fetch_one(pool)
    .await?)
}

/// Returns the user's letters, newest first.
pub async fn list_cover_letters(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<CoverLetterRow>, AppError> {
    Ok(sqlx::query_as::<_, CoverLetterRow>(
        "SELECT * FROM cover_letters WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Fetches one letter. An id owned by another user is indistinguishable
/// from an absent one.
pub async fn get_cover_letter(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<CoverLetterRow, AppError> {
    sqlx::query_as::<_, CoverLetterRow>(
        "SELECT * FROM cover_letters WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Cover letter {id} not found")))
}

/// Owner-scoped delete. Deleting a foreign or missing id reports
/// `NotFound`, never success.
pub async fn delete_cover_letter(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM cover_letters WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Cover letter {id} not found")));
    }

    Ok(())
}
