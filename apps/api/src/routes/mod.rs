pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers::{handle_upload_resume, MAX_FILE_SIZE};
use crate::generation::handlers::handle_generate_bio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/upload-resume", post(handle_upload_resume))
        .route("/api/generate-bio", post(handle_generate_bio))
        // Axum's default body limit is 2 MB; allow the 5 MB upload contract
        // plus multipart framing overhead. Oversize files still get the
        // explicit 400 from the handler.
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 64 * 1024))
        .with_state(state)
}
