use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum InstagramServiceError {
    #[error("access token not configured")]
    CredentialMissing,
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl From<InstagramServiceError> for AppError {
    fn from(err: InstagramServiceError) -> Self {
        match err {
            InstagramServiceError::CredentialMissing => AppError::CredentialMissing,
            InstagramServiceError::Upstream(details) => AppError::Upstream { details },
        }
    }
}
