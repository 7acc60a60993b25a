//! Input validation for the profile/onboarding surface.

use crate::errors::AppError;
use crate::users::handlers::OnboardingRequest;

pub const MAX_BIO_LEN: usize = 500;
pub const MAX_EXPERIENCE_YEARS: i32 = 50;

/// Splits a comma-separated skills string, trimming whitespace and
/// dropping empty segments.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate_onboarding(request: &OnboardingRequest) -> Result<(), AppError> {
    if request.industry.trim().is_empty() {
        return Err(AppError::Validation(
            "Please select an industry".to_string(),
        ));
    }
    if request.sub_industry.trim().is_empty() {
        return Err(AppError::Validation(
            "Please select a specialization".to_string(),
        ));
    }
    if request.experience < 0 {
        return Err(AppError::Validation(
            "Experience must be at least 0 years".to_string(),
        ));
    }
    if request.experience > MAX_EXPERIENCE_YEARS {
        return Err(AppError::Validation(
            "Experience cannot exceed 50 years".to_string(),
        ));
    }
    if let Some(bio) = request.bio.as_deref() {
        if bio.chars().count() > MAX_BIO_LEN {
            return Err(AppError::Validation(
                "Bio cannot exceed 500 characters".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> OnboardingRequest {
        OnboardingRequest {
            industry: "Tech".to_string(),
            sub_industry: "Software Development".to_string(),
            experience: 5,
            skills: "Go, SQL".to_string(),
            bio: Some("Backend engineer".to_string()),
        }
    }

    #[test]
    fn test_parse_skills_trims_and_drops_empties() {
        assert_eq!(
            parse_skills(" Go, SQL ,,  Rust "),
            vec!["Go".to_string(), "SQL".to_string(), "Rust".to_string()]
        );
    }

    #[test]
    fn test_parse_skills_empty_string() {
        assert!(parse_skills("").is_empty());
    }

    #[test]
    fn test_valid_onboarding_passes() {
        assert!(validate_onboarding(&request()).is_ok());
    }

    #[test]
    fn test_missing_industry_rejected() {
        let mut req = request();
        req.industry = "".to_string();
        assert!(matches!(
            validate_onboarding(&req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_experience_over_fifty_rejected() {
        let mut req = request();
        req.experience = 51;
        assert!(matches!(
            validate_onboarding(&req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_experience_rejected() {
        let mut req = request();
        req.experience = -1;
        assert!(matches!(
            validate_onboarding(&req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_experience_bounds_inclusive() {
        let mut req = request();
        req.experience = 0;
        assert!(validate_onboarding(&req).is_ok());
        req.experience = 50;
        assert!(validate_onboarding(&req).is_ok());
    }

    #[test]
    fn test_bio_over_limit_rejected() {
        let mut req = request();
        req.bio = Some("x".repeat(MAX_BIO_LEN + 1));
        assert!(matches!(
            validate_onboarding(&req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_bio_at_limit_passes() {
        let mut req = request();
        req.bio = Some("x".repeat(MAX_BIO_LEN));
        assert!(validate_onboarding(&req).is_ok());
    }
}
