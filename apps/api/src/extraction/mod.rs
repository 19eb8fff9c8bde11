//! Resume extraction pipeline: document bytes → plain text → structured record.
//!
//! The pipeline runs in two stages. `text::extract_text` decodes PDF/DOCX
//! bytes into a normalized plain-text string, then exactly one
//! `StructuringStrategy` turns that text into a `ParsedResume`. The two
//! strategies (regex heuristics and model-delegated JSON extraction) are
//! interchangeable behind the trait and selected once at startup.

pub mod handlers;
pub mod heuristic;
pub mod model_assisted;
pub mod prompts;
pub mod skills;
pub mod text;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::models::resume::{ParseOutcome, ParsedResume};

/// Supported upload formats. Anything else is rejected before extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a file extension to a format tag. The extension match is
    /// case-insensitive and tolerates a leading dot.
    pub fn from_extension(ext: &str) -> Result<Self, ParseError> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            other => Err(ParseError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Pipeline error taxonomy. Every failure carries a human-readable message;
/// `MalformedOutput` additionally preserves the raw model payload so nothing
/// is silently dropped.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported file format '{0}'. Please upload a PDF or DOCX file.")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from document: {0}")]
    Extraction(String),

    #[error("AI completion call failed: {0}")]
    Generation(String),

    #[error("{message}")]
    MalformedOutput { message: String, output: String },
}

/// The structuring strategy: turns extracted plain text into a structured
/// resume record. Held in `AppState` as `Arc<dyn StructuringStrategy>` and
/// selected by the `PARSER_STRATEGY` config at startup.
#[async_trait]
pub trait StructuringStrategy: Send + Sync {
    async fn structure(&self, text: &str) -> Result<ParsedResume, ParseError>;
}

/// Pure-regex strategy. Always succeeds; degrades to empty fields on
/// unstructured text and never recovers experience/project/education
/// sections.
pub struct HeuristicExtractor;

#[async_trait]
impl StructuringStrategy for HeuristicExtractor {
    async fn structure(&self, text: &str) -> Result<ParsedResume, ParseError> {
        Ok(heuristic::extract_heuristic(text))
    }
}

/// Full pipeline for one upload: extract text, apply the configured
/// structuring strategy, and map both outcomes to the uniform result shape.
///
/// There is no automatic fallback from a failed model-assisted structuring
/// attempt to the heuristic path: the failure is surfaced with its
/// diagnostics and the caller decides on retry policy.
pub async fn parse_resume(
    bytes: &[u8],
    format: DocumentFormat,
    strategy: &dyn StructuringStrategy,
) -> ParseOutcome {
    let source_text = match text::extract_text(bytes, format) {
        Ok(text) => text,
        Err(e) => {
            warn!("text extraction failed: {e}");
            return ParseOutcome::failure(e, None);
        }
    };

    match strategy.structure(&source_text).await {
        // raw_text and word_count always reflect the extracted document
        // text, regardless of what the strategy produced.
        Ok(resume) => ParseOutcome::success(resume.with_source_text(&source_text)),
        Err(e) => {
            warn!("structuring failed: {e}");
            ParseOutcome::failure(e, Some(source_text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{CompletionProvider, LlmError};
    use crate::models::resume::word_count;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn docx_bytes(lines: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for line in lines {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    struct StubCompletion(String);

    #[async_trait]
    impl CompletionProvider for StubCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_extension("pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_extension(".DOCX").unwrap(),
            DocumentFormat::Docx
        );
        assert!(matches!(
            DocumentFormat::from_extension("txt"),
            Err(ParseError::UnsupportedFormat(ext)) if ext == "txt"
        ));
    }

    #[tokio::test]
    async fn test_parse_resume_heuristic_recomputes_word_count() {
        let bytes = docx_bytes(&["Jane Doe", "Email: jane@example.com"]);
        let outcome = parse_resume(&bytes, DocumentFormat::Docx, &HeuristicExtractor).await;
        assert!(outcome.success);
        let resume = outcome.resume.unwrap();
        assert_eq!(resume.personal.name, "Jane Doe");
        assert_eq!(resume.word_count, word_count(&resume.raw_text));
    }

    #[tokio::test]
    async fn test_parse_resume_extraction_failure_has_no_raw_text() {
        let outcome = parse_resume(b"not a pdf", DocumentFormat::Pdf, &HeuristicExtractor).await;
        assert!(!outcome.success);
        assert!(outcome.resume.is_none());
        assert!(outcome.raw_text.is_none());
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    async fn test_parse_resume_structuring_failure_keeps_raw_text() {
        let bytes = docx_bytes(&["Jane Doe", "Software Engineer"]);
        let strategy = model_assisted::ModelAssistedExtractor::new(std::sync::Arc::new(
            StubCompletion("no markers in this response".to_string()),
        ));
        let outcome = parse_resume(&bytes, DocumentFormat::Docx, &strategy).await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.raw_text.as_deref(),
            Some("Jane Doe\nSoftware Engineer")
        );
        assert_eq!(outcome.output.as_deref(), Some("no markers in this response"));
    }
}
