// Prompt constants for cover-letter generation.
// Pure string interpolation — no randomness, no time-of-day data. Identical
// inputs must produce byte-identical prompts.

use crate::models::cover_letter::CoverLetterRequest;
use crate::models::user::User;

/// Cover-letter prompt template.
/// Replace: {name}, {industry}, {experience}, {skills}, {bio},
///          {job_title}, {company_name}, {job_description}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a highly targeted and impactful cover letter for the {job_title} position at {company_name} for {name}.

Candidate Profile:
- Name: {name}
- Industry: {industry} (Specifically mention any experience relevant to the target company's industry)
- Years of Experience: {experience}
- Core Skills: {skills} (Emphasize skills relevant to the job description)
- Professional Summary: {bio} (Focus on accomplishments related to the key responsibilities of the target role)

Job Details:
- Job Description: {job_description} (Pay close attention to required technologies and key responsibilities)

Specific Instructions:

1. **Impactful Opening:** Start with a strong hook that connects the candidate's passion or key qualification to the company's mission.
2. **Directly Address Job Requirements:** Mirror the language and keywords from the job description to demonstrate a clear understanding of the role.
3. **Quantify Achievements:** Provide 2-3 specific examples of accomplishments with measurable results (e.g., percentages, numbers), using bullet points or a similar visually appealing format for clarity.
4. **Company Research:** Demonstrate a thorough understanding of {company_name}'s mission, values, and recent projects. Mention a specific project or initiative that resonates with the candidate and explain why.
5. **Skills in Context:** Provide context for how the candidate's skills have been applied in previous roles and how they align with the job requirements.
6. **Acknowledge and Address Skill Gaps (If Applicable):** If there are any minor skill gaps, acknowledge them and express eagerness to learn.
7. **Strong Call to Action:** End with a clear and confident call to action, expressing interest in an interview and highlighting potential contributions to the company. Avoid redundant statements like "resume attached."
8. **Personalization:** If possible, address the hiring manager by name.
9. **Conciseness:** Keep the letter under 400 words, focusing on the most relevant information.
10. **Markdown Formatting:** Use proper business letter formatting in markdown, including:
   - Candidate's contact information (if available)
   - Date
   - Hiring Manager's Name (if known, otherwise use title)
   - Company Address
   - Subject Line
   - Formal salutation and closing

Output the cover letter in Markdown format."#;

/// Renders the cover-letter instruction for a user/job pair.
/// Free-text fields are substituted last so placeholder-looking text inside
/// them is never re-expanded.
pub fn build_cover_letter_prompt(user: &User, job: &CoverLetterRequest) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{experience}", &user.experience.unwrap_or(0).to_string())
        .replace("{industry}", user.industry.as_deref().unwrap_or_default())
        .replace("{skills}", &user.skills.join(", "))
        .replace("{name}", &user.name)
        .replace("{job_title}", &job.job_title)
        .replace("{company_name}", &job.company_name)
        .replace("{bio}", user.bio.as_deref().unwrap_or_default())
        .replace("{job_description}", &job.job_description)
}
