//! Owner-scoped persistence for the singleton resume row.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeData, ResumeRow};

/// Replaces the user's resume wholesale, creating the row on first save.
///
/// Full overwrite, not a patch: every field is written from the payload.
/// Concurrent saves by the same user resolve by upsert atomicity — last
/// writer wins.
pub async fn upsert_resume(
    pool: &PgPool,
    user_id: Uuid,
    data: &ResumeData,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO resumes
            (id, user_id, content, contact_info, summary, skills,
             experience, education, projects)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (user_id) DO UPDATE SET
            content = EXCLUDED.content,
            contact_info = EXCLUDED.contact_info,
            summary = EXCLUDED.summary,
            skills = EXCLUDED.skills,
            experience = EXCLUDED.experience,
            education = EXCLUDED.education,
            projects = EXCLUDED.projects,
            updated_at = now()
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&data.content)
    .bind(Json(&data.contact_info))
    .bind(&data.summary)
    .bind(&data.skills)
    .bind(Json(&data.experience))
    .bind(Json(&data.education))
    .bind(Json(&data.projects))
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetches the user's resume row, if one has been saved.
pub async fn get_resume(pool: &PgPool, user_id: Uuid) -> Result<Option<ResumeRow>, AppError> {
    Ok(
        sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}
