use super::error::InstagramServiceError;
use super::{AccessToken, MediaRepository, Post};
use async_trait::async_trait;
use std::sync::Arc;

pub struct InstagramService {
    repository: Arc<dyn MediaRepository>,
    access_token: Option<AccessToken>,
}

impl InstagramService {
    pub fn new(repository: Arc<dyn MediaRepository>, access_token: Option<AccessToken>) -> Self {
        Self {
            repository,
            access_token,
        }
    }

    fn usable_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref().filter(|token| token.is_usable())
    }
}

#[async_trait]
pub trait InstagramServiceApi: Send + Sync {
    /// Every post of the first upstream page, normalized and in upstream order
    async fn list_posts(&self) -> Result<Vec<Post>, InstagramServiceError>;
}

#[async_trait]
impl InstagramServiceApi for InstagramService {
    async fn list_posts(&self) -> Result<Vec<Post>, InstagramServiceError> {
        let Some(token) = self.usable_token() else {
            tracing::warn!("Instagram token missing or placeholder, skipping upstream call");
            return Err(InstagramServiceError::CredentialMissing);
        };

        tracing::info!("Requesting media from Instagram");

        let page = self.repository.fetch_media(token).await.map_err(|e| {
            tracing::error!(error = %e, "Instagram request failed");
            InstagramServiceError::Upstream(e)
        })?;

        let received = page.data.len();
        let posts = page.into_posts();
        tracing::debug!(received, count = posts.len(), "Normalized Instagram media");

        Ok(posts)
    }
}
