use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready once a usable Instagram token is configured. Never calls Instagram.
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    if config.instagram.is_configured() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "instagram": "configured"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "instagram": "not_configured"
            })),
        )
    }
}
