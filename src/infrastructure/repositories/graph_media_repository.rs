use crate::domain::instagram::{AccessToken, MediaPage, MediaRepository};
use async_trait::async_trait;
use std::time::Duration;

/// Fields requested for every media item
pub const MEDIA_FIELDS: &str = "id,caption,media_type,media_url,permalink,timestamp,thumbnail_url";

/// Instagram Graph API (`/me/media`) implementation of the media repository
pub struct GraphMediaRepository {
    base_url: String,
    http_client: reqwest::Client,
}

impl GraphMediaRepository {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn media_url(&self) -> String {
        format!("{}/me/media", self.base_url)
    }
}

#[async_trait]
impl MediaRepository for GraphMediaRepository {
    async fn fetch_media(&self, access_token: &AccessToken) -> Result<MediaPage, String> {
        // The token travels in the query string, so reqwest errors are
        // stripped of their URL before they are turned into messages.
        let response = self
            .http_client
            .get(self.media_url())
            .query(&[
                ("fields", MEDIA_FIELDS),
                ("access_token", access_token.expose()),
            ])
            .send()
            .await
            .map_err(|e| e.without_url().to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "Instagram API Error: {}",
                status.canonical_reason().unwrap_or("Unknown status")
            ));
        }

        response
            .json::<MediaPage>()
            .await
            .map_err(|e| format!("Failed to parse Instagram response: {}", e.without_url()))
    }
}
