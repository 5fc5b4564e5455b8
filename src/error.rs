use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Instagram token not configured or invalid")]
    CredentialMissing,

    #[error("Failed to connect to Instagram")]
    Upstream { details: String },
}

/// Error body of the feed endpoint.
///
/// `data` is only sent for a missing credential so the gallery still has an
/// (empty) list to fall back on.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::CredentialMissing | Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::CredentialMissing => ErrorResponse {
                error: self.to_string(),
                data: Some(Vec::new()),
                details: None,
            },
            Self::Upstream { details } => ErrorResponse {
                error: self.to_string(),
                data: None,
                details: Some(details.clone()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
