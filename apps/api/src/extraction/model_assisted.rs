//! Model-assisted field extractor: delegates structuring to the injected
//! completion capability and parses the delimited JSON payload it returns.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::extraction::prompts::{END_MARKER, RESUME_PARSE_PROMPT_TEMPLATE, START_MARKER};
use crate::extraction::{ParseError, StructuringStrategy};
use crate::llm_client::CompletionProvider;
use crate::models::resume::ParsedResume;

/// Structuring strategy that asks the model for a `<START>`/`<END>`
/// delimited JSON payload and normalizes it into the full schema.
pub struct ModelAssistedExtractor {
    provider: Arc<dyn CompletionProvider>,
}

impl ModelAssistedExtractor {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl StructuringStrategy for ModelAssistedExtractor {
    async fn structure(&self, text: &str) -> Result<ParsedResume, ParseError> {
        extract_via_model(text, self.provider.as_ref()).await
    }
}

/// Runs one model-assisted extraction over already-extracted document text.
///
/// Failure modes: `Generation` when the completion call itself fails, and
/// `MalformedOutput` when the response lacks the boundary markers (carrying
/// the full response) or the delimited payload is not valid JSON (carrying
/// the delimited substring). The raw model text is never discarded on these
/// paths; it is required for debugging and manual recovery.
pub async fn extract_via_model(
    text: &str,
    provider: &dyn CompletionProvider,
) -> Result<ParsedResume, ParseError> {
    let prompt = build_parse_prompt(text);

    let response = provider
        .complete(&prompt)
        .await
        .map_err(|e| ParseError::Generation(e.to_string()))?;

    debug!("model returned {} chars", response.len());

    let payload = delimited_payload(&response).map(str::to_string);
    let Some(payload) = payload else {
        return Err(ParseError::MalformedOutput {
            message: "AI did not return JSON between expected markers".to_string(),
            output: response,
        });
    };

    let value: Value = match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(_) => {
            return Err(ParseError::MalformedOutput {
                message: "AI returned invalid JSON".to_string(),
                output: payload,
            })
        }
    };

    Ok(resume_from_payload(&value).with_source_text(text))
}

pub(crate) fn build_parse_prompt(text: &str) -> String {
    RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", text)
}

/// First substring delimited by the literal markers, trimmed.
fn delimited_payload(response: &str) -> Option<&str> {
    let start = response.find(START_MARKER)? + START_MARKER.len();
    let rest = &response[start..];
    let end = rest.find(END_MARKER)?;
    Some(rest[..end].trim())
}

/// Normalizes a parsed payload into the full schema. Each of the four
/// collection groups coerces to empty when missing, not a sequence, or
/// shaped wrong — that specific mismatch never escalates. `raw_text` and
/// `word_count` are left for `with_source_text` to fill from the document.
fn resume_from_payload(value: &Value) -> ParsedResume {
    ParsedResume {
        personal: value
            .get("personal")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default(),
        skills: seq_or_empty(value.get("skills")),
        work_experience: seq_or_empty(value.get("work_experience")),
        projects: seq_or_empty(value.get("projects")),
        education: seq_or_empty(value.get("education")),
        ..Default::default()
    }
}

fn seq_or_empty<T: DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    value
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}
