use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Health response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub mail_configuration: String,
    pub timestamp: String,
}

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - Health check endpoint
///
/// Reports whether dispatch configuration is complete; makes no outbound
/// calls.
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let mail_status = if state.config.is_dispatch_ready() {
        "configured"
    } else {
        "incomplete"
    };

    let overall_status = if mail_status == "configured" {
        "healthy"
    } else {
        "unhealthy"
    };

    Ok(Json(HealthResponse {
        status: overall_status.to_string(),
        mail_configuration: mail_status.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
