//! Professional bio generation with a deterministic template fallback.
//!
//! The bio endpoint never fails purely because the model is down: any
//! completion error degrades to a template assembled from the resume data.

use serde_json::Value;
use tracing::warn;

use crate::generation::prompts::{BIO_PROMPT_TEMPLATE, BIO_SYSTEM};
use crate::llm_client::LlmClient;

const BIO_MAX_TOKENS: u32 = 200;
// Creative but controlled
const BIO_TEMPERATURE: f32 = 0.7;

/// How much raw resume text is fed to the prompt as context.
const CONTEXT_CHARS: usize = 300;

/// Generates a 2-3 sentence bio from parsed resume data. The input is the
/// caller-supplied parse result as loose JSON; missing fields degrade to
/// placeholders rather than erroring.
pub async fn generate_bio(resume_data: &Value, llm: &LlmClient) -> String {
    let name = personal_name(resume_data);
    let skills = skill_list(resume_data);
    let top_skills = if skills.is_empty() {
        "various technologies".to_string()
    } else {
        skills.iter().take(5).cloned().collect::<Vec<_>>().join(", ")
    };
    let context: String = resume_data
        .get("raw_text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .chars()
        .take(CONTEXT_CHARS)
        .collect();

    let prompt = BIO_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{context}", &context)
        .replace("{skills}", &top_skills);

    match llm
        .call(&prompt, Some(BIO_SYSTEM), BIO_MAX_TOKENS, BIO_TEMPERATURE)
        .await
    {
        Ok(bio) => bio.trim().trim_matches('"').trim_matches('\'').to_string(),
        Err(e) => {
            warn!("bio generation failed, falling back to template: {e}");
            fallback_bio(resume_data)
        }
    }
}

/// Template-based bio used when the completion call fails.
pub fn fallback_bio(resume_data: &Value) -> String {
    let name = personal_name(resume_data);
    let skills = skill_list(resume_data);
    let top_skills = if skills.len() >= 3 {
        skills[..3].join(", ")
    } else {
        "modern technologies".to_string()
    };

    format!(
        "{name} is an experienced professional specializing in {top_skills}. \
         Passionate about delivering high-quality solutions and staying current \
         with industry best practices. Known for problem-solving abilities and \
         collaborative approach to development."
    )
}

fn personal_name(resume_data: &Value) -> &str {
    resume_data
        .get("personal")
        .and_then(|p| p.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or("Professional")
}

fn skill_list(resume_data: &Value) -> Vec<String> {
    resume_data
        .get("skills")
        .and_then(Value::as_array)
        .map(|skills| {
            skills
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_bio_uses_top_three_skills() {
        let data = json!({
            "personal": {"name": "Jane Doe"},
            "skills": ["python", "react", "docker", "aws"]
        });
        let bio = fallback_bio(&data);
        assert!(bio.starts_with("Jane Doe is an experienced professional"));
        assert!(bio.contains("python, react, docker"));
        assert!(!bio.contains("aws"));
    }

    #[test]
    fn test_fallback_bio_with_few_skills_uses_generic_phrase() {
        let data = json!({"personal": {"name": "Jane Doe"}, "skills": ["python"]});
        assert!(fallback_bio(&data).contains("modern technologies"));
    }

    #[test]
    fn test_fallback_bio_without_name_uses_placeholder() {
        let data = json!({"skills": []});
        assert!(fallback_bio(&data).starts_with("Professional is"));
    }
}
