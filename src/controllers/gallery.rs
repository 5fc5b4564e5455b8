use axum::extract::State;
use maud::Markup;
use std::sync::Arc;

use crate::domain::gallery::{render, FeedSource, GalleryView, InstagramProfile};

pub const FRAGMENT_PATH: &str = "/gallery/fragment";

pub struct GalleryController {
    feed_source: Arc<dyn FeedSource>,
    profile: InstagramProfile,
}

impl GalleryController {
    pub fn new(feed_source: Arc<dyn FeedSource>, profile: InstagramProfile) -> Self {
        Self {
            feed_source,
            profile,
        }
    }

    /// GET /gallery - Page shell showing the loading skeleton
    pub async fn page(State(controller): State<Arc<GalleryController>>) -> Markup {
        render::page(FRAGMENT_PATH, &controller.profile)
    }

    /// GET /gallery/fragment - Mounts a gallery, loads the feed once and
    /// renders whatever state it settled in
    pub async fn fragment(State(controller): State<Arc<GalleryController>>) -> Markup {
        let view = GalleryView::mount()
            .load(controller.feed_source.as_ref())
            .await;
        view.render(&controller.profile)
    }
}
