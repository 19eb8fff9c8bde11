use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Basic service info for anyone poking the root.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "PortfolioAI API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs"
    }))
}

/// GET /api/health
/// Returns a simple status object.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Service is running normally"
    }))
}
