//! Persistence for user records.

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;

pub async fn find_by_external_id(
    pool: &PgPool,
    external_id: &str,
) -> Result<Option<User>, AppError> {
    Ok(
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE external_id = $1")
            .bind(external_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Get-or-create on first authenticated access. Idempotent: a concurrent
/// sync for the same subject resolves to the row that won the insert.
pub async fn sync_user(
    pool: &PgPool,
    external_id: &str,
    name: &str,
    email: &str,
) -> Result<User, AppError> {
    if let Some(user) = find_by_external_id(pool, external_id).await? {
        return Ok(user);
    }

    let inserted = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, external_id, name, email)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (external_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(external_id)
    .bind(name)
    .bind(email)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(user) => {
            info!("Provisioned user {} for subject {external_id}", user.id);
            Ok(user)
        }
        // Lost the insert race; the winner's row is there to read
        None => find_by_external_id(pool, external_id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow!("user sync race left no row"))),
    }
}

/// Writes the onboarding profile fields.
pub async fn update_onboarding(
    pool: &PgPool,
    user_id: Uuid,
    industry: &str,
    sub_industry: &str,
    experience: i32,
    skills: &[String],
    bio: Option<&str>,
) -> Result<User, AppError> {
    Ok(sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET industry = $2,
            sub_industry = $3,
            experience = $4,
            skills = $5,
            bio = $6,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(industry)
    .bind(sub_industry)
    .bind(experience)
    .bind(skills)
    .bind(bio)
    .fetch_one(pool)
    .await?)
}
