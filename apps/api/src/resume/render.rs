//! Markdown assembly for the combined resume document.
//!
//! Mirrors what the resume editor shows: contact block, summary, skills,
//! then one section per entry list. Empty sections are dropped entirely.

use crate::models::resume::{ContactInfo, Entry, ResumeData};

/// Formats an entry's date range. A current entry always reads
/// "start - Present"; any supplied end date is ignored.
pub fn format_period(entry: &Entry) -> String {
    if entry.current {
        format!("{} - Present", entry.start_date)
    } else {
        format!("{} - {}", entry.start_date, entry.end_date)
    }
}

/// Clears the end date on current entries so a stale value can never be
/// stored.
pub fn normalize_entries(entries: &mut [Entry]) {
    for entry in entries {
        if entry.current {
            entry.end_date.clear();
        }
    }
}

/// Renders the contact block, skipping unset channels.
pub fn contact_markdown(contact: &ContactInfo) -> String {
    let mut parts = Vec::new();
    if !contact.email.is_empty() {
        parts.push(format!("📧 {}", contact.email));
    }
    if !contact.mobile.is_empty() {
        parts.push(format!("📱 {}", contact.mobile));
    }
    if !contact.linkedin.is_empty() {
        parts.push(format!("💼 [LinkedIn]({})", contact.linkedin));
    }
    if !contact.twitter.is_empty() {
        parts.push(format!("🐦 [Twitter]({})", contact.twitter));
    }
    parts.join(" | ")
}

/// Renders a plain entry section (work experience, projects).
pub fn entries_to_markdown(entries: &[Entry], title: &str) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let body = entries
        .iter()
        .map(|entry| {
            format!(
                "### {} @ {}\n\n**Duration:** {}\n\n{}",
                entry.title,
                entry.organization,
                format_period(entry),
                entry.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Some(format!("## {title}\n\n{body}"))
}

/// Renders the education section, which carries additional optional fields.
pub fn education_to_markdown(entries: &[Entry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let body = entries
        .iter()
        .map(|edu| {
            let mut parts = vec![format!("### {} @ {}", edu.title, edu.organization)];

            let labeled = [
                ("Location", &edu.location),
                ("Board/University", &edu.board_university),
                ("Grade/Percentage", &edu.grade_percentage),
                ("Field of Study", &edu.field_of_study),
                ("Achievements", &edu.achievements),
            ];
            for (label, value) in labeled {
                if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                    parts.push(format!("**{label}:** {value}"));
                }
            }

            parts.push(format!("**Duration:** {}", format_period(edu)));

            if !edu.description.is_empty() {
                parts.push(format!("**Description:**\n{}", edu.description));
            }

            parts.join("\n\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Some(format!("## Education\n\n{body}"))
}

/// Assembles the full document from the structured fields.
pub fn combined_content(data: &ResumeData) -> String {
    let mut sections = Vec::new();

    let contact = contact_markdown(&data.contact_info);
    if !contact.is_empty() {
        sections.push(contact);
    }
    if !data.summary.is_empty() {
        sections.push(format!("## Professional Summary\n\n{}", data.summary));
    }
    if !data.skills.is_empty() {
        sections.push(format!("## Skills\n\n{}", data.skills));
    }
    sections.extend(entries_to_markdown(&data.experience, "Work Experience"));
    sections.extend(education_to_markdown(&data.education));
    sections.extend(entries_to_markdown(&data.projects, "Projects"));

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, start: &str, end: &str, current: bool) -> Entry {
        Entry {
            title: title.to_string(),
            organization: "Acme".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            description: "Built backend services".to_string(),
            current,
            ..Default::default()
        }
    }

    #[test]
    fn test_current_entry_renders_present_regardless_of_end_date() {
        let e = entry("Backend Engineer", "Jan 2023", "Dec 2024", true);
        let period = format_period(&e);
        assert_eq!(period, "Jan 2023 - Present");
        assert!(!period.contains("Dec 2024"));
    }

    #[test]
    fn test_finished_entry_renders_end_date() {
        let e = entry("Backend Engineer", "Jan 2020", "Dec 2022", false);
        assert_eq!(format_period(&e), "Jan 2020 - Dec 2022");
    }

    #[test]
    fn test_normalize_clears_end_date_on_current_entries() {
        let mut entries = vec![
            entry("Backend Engineer", "Jan 2023", "Dec 2024", true),
            entry("Intern", "Jun 2019", "Aug 2019", false),
        ];
        normalize_entries(&mut entries);
        assert_eq!(entries[0].end_date, "");
        assert_eq!(entries[1].end_date, "Aug 2019");
    }

    #[test]
    fn test_contact_markdown_skips_unset_channels() {
        let contact = ContactInfo {
            email: "alex@example.com".to_string(),
            linkedin: "https://linkedin.com/in/alex".to_string(),
            ..Default::default()
        };
        let md = contact_markdown(&contact);
        assert_eq!(
            md,
            "📧 alex@example.com | 💼 [LinkedIn](https://linkedin.com/in/alex)"
        );
    }

    #[test]
    fn test_empty_entry_list_renders_nothing() {
        assert_eq!(entries_to_markdown(&[], "Work Experience"), None);
    }

    #[test]
    fn test_education_extras_rendered_when_present() {
        let mut edu = entry("BSc Computer Science", "Aug 2018", "May 2022", false);
        edu.organization = "State University".to_string();
        edu.board_university = Some("State Board".to_string());
        edu.grade_percentage = Some("3.8 GPA".to_string());
        edu.field_of_study = Some("Computer Science".to_string());
        let md = education_to_markdown(std::slice::from_ref(&edu)).unwrap();
        assert!(md.contains("## Education"));
        assert!(md.contains("**Board/University:** State Board"));
        assert!(md.contains("**Grade/Percentage:** 3.8 GPA"));
        assert!(md.contains("**Field of Study:** Computer Science"));
        assert!(!md.contains("**Location:**"));
    }

    #[test]
    fn test_combined_content_drops_empty_sections() {
        let data = ResumeData {
            summary: "Backend engineer with 5 years of experience".to_string(),
            skills: "Go, SQL".to_string(),
            ..Default::default()
        };
        let content = combined_content(&data);
        assert!(content.contains("## Professional Summary"));
        assert!(content.contains("## Skills"));
        assert!(!content.contains("## Work Experience"));
        assert!(!content.contains("## Education"));
        assert!(!content.contains("## Projects"));
    }

    #[test]
    fn test_combined_content_orders_sections() {
        let data = ResumeData {
            summary: "Summary text".to_string(),
            skills: "Go".to_string(),
            experience: vec![entry("Backend Engineer", "Jan 2023", "", true)],
            projects: vec![entry("Side Project", "Jan 2022", "Mar 2022", false)],
            ..Default::default()
        };
        let content = combined_content(&data);
        let summary_at = content.find("## Professional Summary").unwrap();
        let skills_at = content.find("## Skills").unwrap();
        let experience_at = content.find("## Work Experience").unwrap();
        let projects_at = content.find("## Projects").unwrap();
        assert!(summary_at < skills_at);
        assert!(skills_at < experience_at);
        assert!(experience_at < projects_at);
    }
}
