//! Heuristic field extractor: pure-regex structuring that always succeeds.
//!
//! Recovers name, email, and phone via pattern matching and skills via
//! fixed-vocabulary membership. Work experience, projects, and education
//! are not recovered by this strategy and stay empty.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extraction::skills::SKILL_VOCABULARY;
use crate::models::resume::{ParsedResume, PersonalInfo};

lazy_static! {
    // local@domain.tld with an ASCII local part and a 2+ letter TLD
    static ref EMAIL_RE: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}").unwrap();

    // Optional +country code, optional (possibly parenthesized) area code,
    // then 3 digits, separator, 4 digits. Separators: space, dot, hyphen.
    static ref PHONE_RE: Regex =
        Regex::new(r"(?:\+\d{1,3}[-.\s]?)?(?:\(\d{3}\)|\d{3})?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
}

/// Structures plain text with regex heuristics. Always succeeds; empty or
/// unstructured text degrades to empty fields.
pub fn extract_heuristic(text: &str) -> ParsedResume {
    let name = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string();

    let email = EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let phone = PHONE_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    ParsedResume {
        personal: PersonalInfo {
            name,
            email,
            phone,
            location: String::new(),
        },
        skills: match_skills(text),
        ..Default::default()
    }
    .with_source_text(text)
}

/// Case-insensitive substring membership of the vocabulary against the full
/// text. The result is sorted and deduplicated for determinism.
fn match_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| lowered.contains(*skill))
        .map(|skill| skill.to_string())
        .collect();
    found.sort();
    found.dedup();
    found
}
