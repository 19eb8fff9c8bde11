// LLM prompt constants for the Generation module.

/// System prompt for bio generation.
pub const BIO_SYSTEM: &str =
    "You are a professional career writer specializing in portfolio bios.";

/// Bio prompt template. Replace `{name}`, `{context}`, and `{skills}`
/// before sending.
pub const BIO_PROMPT_TEMPLATE: &str = r#"Write a compelling professional bio (2-3 sentences) for {name}'s portfolio.

Context from their resume: {context}

Key skills: {skills}

Requirements:
- Professional and confident tone
- 2-3 sentences only
- Highlight expertise and passion
- Suitable for portfolio website
- No bullet points, just flowing text"#;
