// LLM prompt constants for model-assisted resume extraction.

/// Literal boundary markers the model must wrap its JSON payload in.
pub const START_MARKER: &str = "<START>";
pub const END_MARKER: &str = "<END>";

/// Resume extraction prompt template. Replace `{resume_text}` before sending.
///
/// The prompt pins the exact target JSON shape, instructs that missing
/// sections become empty arrays, and requires the payload strictly between
/// the boundary markers with no surrounding prose.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Given the following resume text, extract the following strictly as valid JSON (no markdown, no explanation):

- personal: {name, email, phone, location}
- skills: array of strings
- work_experience: array of objects with employer, job_title, start_date, end_date, description
- projects: array of objects with title, description, tech_stack, year
- education: array of objects with institution, degree, start_date, end_date, major, gpa

Include empty arrays if sections are missing.

Return ONLY JSON between <START> and <END> markers.

<START>
{
  "personal": {"name": "...", "email": "...", "phone": "...", "location": "..."},
  "skills": ["..."],
  "work_experience": [{"employer": "...", "job_title": "...", "start_date": "...", "end_date": "...", "description": "..."}],
  "projects": [{"title": "...", "description": "...", "tech_stack": "...", "year": "..."}],
  "education": [{"institution": "...", "degree": "...", "start_date": "...", "end_date": "...", "major": "...", "gpa": "..."}]
}
<END>

Resume Text:
{resume_text}

Output only the JSON between <START> and <END>."#;
