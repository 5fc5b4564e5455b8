use maud::Markup;

use super::render;
use super::{FeedResult, FeedSource, GalleryFailure, GalleryState, InstagramProfile};

/// One mount of the gallery.
///
/// Starts in `Loading` and leaves it exactly once, through whichever outcome
/// arrives first. There is no retry; a new attempt needs a new mount.
#[derive(Debug)]
pub struct GalleryView {
    state: GalleryState,
}

impl GalleryView {
    pub fn mount() -> Self {
        Self {
            state: GalleryState::Loading,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Requests the feed once and settles on the outcome.
    /// A view that has already settled is returned untouched.
    pub async fn load(mut self, source: &dyn FeedSource) -> Self {
        if !self.state.is_loading() {
            return self;
        }

        let outcome = source.fetch_feed().await;
        self.settle(outcome);
        self
    }

    /// Applies an outcome if the view is still loading. Returns whether it was applied.
    pub fn settle(&mut self, outcome: Result<FeedResult, GalleryFailure>) -> bool {
        if !self.state.is_loading() {
            tracing::debug!("Gallery already settled, ignoring late feed outcome");
            return false;
        }

        let next = GalleryState::from_outcome(outcome);
        match &next {
            GalleryState::Ready(posts) => {
                tracing::debug!(count = posts.len(), "Gallery ready");
            }
            GalleryState::Failed(failure @ GalleryFailure::Reported(_)) => {
                tracing::warn!(error = %failure, "Gallery falling back");
            }
            GalleryState::Failed(failure) => {
                tracing::error!(error = %failure, "Gallery falling back");
            }
            GalleryState::Loading => {}
        }

        self.state = next;
        true
    }

    pub fn render(&self, profile: &InstagramProfile) -> Markup {
        if self.state.is_loading() {
            render::skeleton()
        } else if self.state.shows_fallback() {
            render::fallback(profile)
        } else {
            render::grid(self.state.posts(), profile)
        }
    }
}
