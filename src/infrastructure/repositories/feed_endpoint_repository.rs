use crate::domain::gallery::{FeedResult, FeedSource, GalleryFailure};
use async_trait::async_trait;
use std::time::Duration;

/// Fetches the feed the way a browser would: over HTTP from our own endpoint
pub struct FeedEndpointRepository {
    feed_url: String,
    http_client: reqwest::Client,
}

impl FeedEndpointRepository {
    pub fn new(feed_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            feed_url: feed_url.into(),
            http_client,
        })
    }
}

#[async_trait]
impl FeedSource for FeedEndpointRepository {
    async fn fetch_feed(&self) -> Result<FeedResult, GalleryFailure> {
        let response = self
            .http_client
            .get(&self.feed_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GalleryFailure::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status.as_u16(), body = %body, "Feed endpoint returned an error status");
            return Err(GalleryFailure::Fetch(format!(
                "feed endpoint returned {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GalleryFailure::Fetch(e.to_string()))?;

        serde_json::from_slice::<FeedResult>(&bytes)
            .map_err(|e| GalleryFailure::Malformed(e.to_string()))
    }
}
