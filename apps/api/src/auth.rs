//! Identity resolution for edge-authenticated requests.
//!
//! The gateway terminates the user session and forwards the verified auth
//! subject in the `x-auth-subject` header. A request without the header has
//! no active session and fails closed before any handler logic runs.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;

pub const SUBJECT_HEADER: &str = "x-auth-subject";

/// The caller's external auth subject, extracted from request headers.
#[derive(Debug, Clone)]
pub struct Identity(pub String);

/// Reads the verified subject from request headers, if present and non-blank.
pub fn subject_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SUBJECT_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        subject_from_headers(&parts.headers)
            .map(Identity)
            .ok_or(AppError::Unauthorized)
    }
}

/// Looks up the internal user for an external subject.
///
/// Orchestrators never auto-provision: a session without a matching user
/// row is a caller error, not a signup path. First-access provisioning
/// happens only through the profile sync endpoint.
pub async fn resolve_current_user(pool: &PgPool, identity: &Identity) -> Result<User, AppError> {
    crate::users::store::find_by_external_id(pool, &identity.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
