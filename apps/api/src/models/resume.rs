use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted resume row. Singleton per user (unique on `user_id`), replaced
/// wholesale on every save.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub contact_info: Json<ContactInfo>,
    pub summary: String,
    pub skills: String,
    pub experience: Json<Vec<Entry>>,
    pub education: Json<Vec<Entry>>,
    pub projects: Json<Vec<Entry>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Contact channels shown at the top of the rendered document.
/// Unset channels stay empty and are skipped by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub mobile: String,
    pub linkedin: String,
    pub twitter: String,
}

/// An embedded work/education/project record. Education entries use the
/// optional trailing fields; the other kinds leave them absent.
///
/// When `current` is set the end period is empty — the store normalizes it
/// away and the renderer never shows one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entry {
    pub title: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
}

/// Resume payload at the API boundary, in both directions. Missing fields
/// land on their declared defaults here, not ad hoc at each use site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub content: String,
    pub contact_info: ContactInfo,
    pub summary: String,
    pub skills: String,
    pub experience: Vec<Entry>,
    pub education: Vec<Entry>,
    pub projects: Vec<Entry>,
}

impl From<ResumeRow> for ResumeData {
    fn from(row: ResumeRow) -> Self {
        ResumeData {
            content: row.content,
            contact_info: row.contact_info.0,
            summary: row.summary,
            skills: row.skills,
            experience: row.experience.0,
            education: row.education.0,
            projects: row.projects.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_data_defaults_from_empty_object() {
        let data: ResumeData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, ResumeData::default());
    }

    #[test]
    fn test_entry_deserializes_camel_case_wire_format() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "title": "BSc Computer Science",
                "organization": "State University",
                "startDate": "Aug 2018",
                "endDate": "May 2022",
                "description": "Graduated with honors",
                "current": false,
                "boardUniversity": "State Board",
                "fieldOfStudy": "Computer Science"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.start_date, "Aug 2018");
        assert_eq!(entry.board_university.as_deref(), Some("State Board"));
        assert_eq!(entry.field_of_study.as_deref(), Some("Computer Science"));
        assert_eq!(entry.location, None);
    }

    #[test]
    fn test_entry_education_extras_absent_from_plain_entries() {
        let entry = Entry {
            title: "Backend Engineer".to_string(),
            organization: "Acme".to_string(),
            start_date: "Jan 2020".to_string(),
            current: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("boardUniversity").is_none());
        assert_eq!(json["startDate"], "Jan 2020");
    }
}
