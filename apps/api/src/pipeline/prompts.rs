// Prompt templates for the three pipeline stages.
// Placeholders in `{braces}` are filled with `str::replace` before sending.

/// Analyzer prompt. Replace `{project}`.
pub const ANALYZER_PROMPT_TEMPLATE: &str =
    "Summarize this project and identify if it's web, data, or mobile: {project}";

/// Recommender prompt. Replace `{summary}`.
pub const RECOMMENDER_PROMPT_TEMPLATE: &str =
    "Suggest a suitable tech stack for this project: {summary}. Keep it short.";

/// Allocator prompt. Replace `{students_json}` first, then `{tech_stack}`.
pub const ALLOCATOR_PROMPT_TEMPLATE: &str = r#"
You are a staffing assistant.

Pick the BEST 2 students based on skill match with the tech stack.

Return STRICT JSON ONLY:

{
 "selected": [
   {"name": "Student Name", "visa": "VisaType"}
 ]
}

Tech stack:
{tech_stack}

Students:
{students_json}
"#;
