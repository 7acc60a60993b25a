//! Cover-letter generation — the pipeline from job parameters to a stored
//! letter.
//!
//! Flow: validate → build prompt → generation call → owner-scoped INSERT.
//! Any stage failure aborts the whole operation; nothing partial is stored.

use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::letters::prompts::build_cover_letter_prompt;
use crate::letters::store;
use crate::llm_client::TextGenerator;
use crate::models::cover_letter::{CoverLetterRequest, CoverLetterRow};
use crate::models::user::User;

/// Validates the job parameters. All three fields are required.
pub fn validate_request(request: &CoverLetterRequest) -> Result<(), AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle is required".to_string()));
    }
    if request.company_name.trim().is_empty() {
        return Err(AppError::Validation("companyName is required".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription is required".to_string(),
        ));
    }
    Ok(())
}

/// Runs the generation pipeline and persists the result scoped to
/// `user.id`.
///
/// Repeated requests with identical job parameters always create a new
/// letter; there is no dedupe.
pub async fn generate_cover_letter(
    pool: &PgPool,
    llm: &dyn TextGenerator,
    user: &User,
    request: CoverLetterRequest,
) -> Result<CoverLetterRow, AppError> {
    validate_request(&request)?;

    let prompt = build_cover_letter_prompt(user, &request);

    let content = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    let letter = store::insert_cover_letter(pool, user.id, &request, &content).await?;

    info!(
        "Generated cover letter {} ({} at {}) for user {}",
        letter.id, letter.job_title, letter.company_name, user.id
    );

    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, company: &str, description: &str) -> CoverLetterRequest {
        CoverLetterRequest {
            job_title: title.to_string(),
            company_name: company.to_string(),
            job_description: description.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_request(&request("Backend Engineer", "Acme", "Build APIs")).is_ok());
    }

    #[test]
    fn test_blank_job_title_rejected() {
        let err = validate_request(&request("  ", "Acme", "Build APIs")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_company_rejected() {
        let err = validate_request(&request("Backend Engineer", "", "Build APIs")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = validate_request(&request("Backend Engineer", "Acme", "")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
