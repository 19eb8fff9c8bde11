//! Structured resume record produced by the extraction pipeline.
//!
//! All leaf fields are plain strings defaulting to empty; a resume that
//! lacks a section still serializes with an empty array, never null.

use serde::{Deserialize, Serialize};

use crate::extraction::ParseError;

/// Contact and location details. Last-extracted value wins; no uniqueness
/// constraint is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub gpa: String,
}

/// Root record for a single parsed resume.
///
/// Invariants: `raw_text` is always the literal extracted document text,
/// never model output, and `word_count` is always recomputed from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub word_count: usize,
}

impl ParsedResume {
    /// Attaches the original extracted document text and recomputes
    /// `word_count` from it. Anything a model echoed back is discarded.
    pub fn with_source_text(mut self, text: &str) -> Self {
        self.raw_text = text.to_string();
        self.word_count = word_count(text);
        self
    }
}

/// Whitespace-delimited token count of a text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Uniform result shape for one parse request.
///
/// On success the resume fields are flattened into the top level; on
/// failure `error` carries a human-readable message, `raw_text` carries the
/// extracted document text when extraction itself succeeded, and `output`
/// carries the raw model payload for malformed-output failures.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    pub success: bool,
    #[serde(flatten)]
    pub resume: Option<ParsedResume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl ParseOutcome {
    pub fn success(resume: ParsedResume) -> Self {
        Self {
            success: true,
            resume: Some(resume),
            error: None,
            output: None,
            raw_text: None,
        }
    }

    /// Maps a pipeline error to the failure shape. `raw_text` should be the
    /// extracted document text when structuring failed after a successful
    /// extraction, or `None` when extraction itself failed.
    pub fn failure(error: ParseError, raw_text: Option<String>) -> Self {
        let (message, output) = match error {
            ParseError::MalformedOutput { message, output } => (message, Some(output)),
            other => (other.to_string(), None),
        };
        Self {
            success: false,
            resume: None,
            error: Some(message),
            output,
            raw_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        assert_eq!(word_count("one two\tthree\nfour"), 4);
        assert_eq!(word_count("   spaced   out   "), 2);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_with_source_text_overwrites_echoed_text() {
        let resume = ParsedResume {
            raw_text: "model-invented text".to_string(),
            word_count: 999,
            ..Default::default()
        };
        let resume = resume.with_source_text("the real document text");
        assert_eq!(resume.raw_text, "the real document text");
        assert_eq!(resume.word_count, 4);
    }

    #[test]
    fn test_success_outcome_flattens_resume_fields() {
        let resume = ParsedResume {
            skills: vec!["python".to_string()],
            ..Default::default()
        }
        .with_source_text("hello world");
        let json = serde_json::to_value(ParseOutcome::success(resume)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["skills"][0], "python");
        assert_eq!(json["word_count"], 2);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_outcome_carries_diagnostics() {
        let err = ParseError::MalformedOutput {
            message: "AI returned invalid JSON".to_string(),
            output: "not json".to_string(),
        };
        let json =
            serde_json::to_value(ParseOutcome::failure(err, Some("doc text".to_string()))).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "AI returned invalid JSON");
        assert_eq!(json["output"], "not json");
        assert_eq!(json["raw_text"], "doc text");
        assert!(json.get("skills").is_none());
    }
}
