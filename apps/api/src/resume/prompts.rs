// Prompt constants for resume-entry improvement.

/// Entry-improvement prompt template.
/// Replace: {entry_type}, {industry}, {current}
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer, improve the following {entry_type} description for a {industry} professional.
Make it more impactful, quantifiable, and aligned with industry standards.
Current content: "{current}"

Requirements:
1. Use action verbs
2. Include metrics and results where possible
3. Highlight relevant technical skills
4. Keep it concise but detailed
5. Focus on achievements over responsibilities
6. Use industry-specific keywords

Format the response as a single paragraph without any additional text or explanations."#;

/// Renders the improvement instruction for one entry description.
/// The user's own text is substituted last so placeholder-looking content
/// inside it is never re-expanded.
pub fn build_improvement_prompt(current: &str, entry_type: &str, industry: &str) -> String {
    IMPROVE_PROMPT_TEMPLATE
        .replace("{entry_type}", entry_type)
        .replace("{industry}", industry)
        .replace("{current}", current)
}
