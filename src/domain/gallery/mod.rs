pub mod render;
pub mod state;
pub mod view;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::instagram::Post;

pub use state::{GalleryFailure, GalleryState, MAX_TILES, SKELETON_TILES};
pub use view::GalleryView;

/// Body returned by the feed endpoint: a post list or an error object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeedResult {
    Posts(Vec<Post>),
    Error { error: String },
}

/// Where the gallery gets its posts from. Called once per mount.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_feed(&self) -> Result<FeedResult, GalleryFailure>;
}

/// Profile linked from the fallback panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramProfile {
    pub handle: String,
}

impl InstagramProfile {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into().trim_start_matches('@').to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("https://www.instagram.com/{}/", self.handle)
    }
}
