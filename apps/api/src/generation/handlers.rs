//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::generation::bio::generate_bio;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BioResponse {
    pub success: bool,
    pub bio: String,
    pub message: String,
}

/// POST /api/generate-bio
///
/// Takes the parsed resume data as loose JSON and returns a short
/// professional bio. Model failures degrade to the template fallback, so
/// this handler itself is infallible.
pub async fn handle_generate_bio(
    State(state): State<AppState>,
    Json(resume_data): Json<Value>,
) -> Json<BioResponse> {
    let bio = generate_bio(&resume_data, &state.llm).await;
    Json(BioResponse {
        success: true,
        bio,
        message: "Bio generated successfully".to_string(),
    })
}
