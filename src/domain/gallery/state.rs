use super::FeedResult;
use crate::domain::instagram::Post;

/// Tiles shown at most; extra posts are dropped by the view, not the endpoint
pub const MAX_TILES: usize = 12;

/// Placeholder tiles while loading
pub const SKELETON_TILES: usize = 8;

/// Why the gallery could not show posts. Only logged, never rendered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GalleryFailure {
    #[error("feed request failed: {0}")]
    Fetch(String),
    #[error("feed endpoint reported an error: {0}")]
    Reported(String),
    #[error("malformed feed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryState {
    Loading,
    Ready(Vec<Post>),
    Failed(GalleryFailure),
}

impl GalleryState {
    pub fn from_outcome(outcome: Result<FeedResult, GalleryFailure>) -> Self {
        match outcome {
            Ok(FeedResult::Posts(mut posts)) => {
                posts.truncate(MAX_TILES);
                Self::Ready(posts)
            }
            Ok(FeedResult::Error { error }) => Self::Failed(GalleryFailure::Reported(error)),
            Err(failure) => Self::Failed(failure),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Empty feeds and failures look the same to visitors
    pub fn shows_fallback(&self) -> bool {
        match self {
            Self::Loading => false,
            Self::Ready(posts) => posts.is_empty(),
            Self::Failed(_) => true,
        }
    }

    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Ready(posts) => posts,
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}
