use axum::{extract::State, http::header, response::IntoResponse, Json};
use std::sync::Arc;

use crate::{
    domain::instagram::{InstagramService, InstagramServiceApi},
    error::AppResult,
};

/// Lets intermediaries serve the feed for five minutes instead of hitting Instagram
pub const FEED_CACHE_CONTROL: &str = "public, max-age=300, s-maxage=300";

pub struct InstagramController {
    instagram_service: Arc<InstagramService>,
}

impl InstagramController {
    pub fn new(instagram_service: Arc<InstagramService>) -> Self {
        Self { instagram_service }
    }

    /// GET /api/instagram - Normalized posts of the configured account
    pub async fn get_media(
        State(controller): State<Arc<InstagramController>>,
    ) -> AppResult<impl IntoResponse> {
        let posts = controller.instagram_service.list_posts().await?;
        Ok(([(header::CACHE_CONTROL, FEED_CACHE_CONTROL)], Json(posts)))
    }
}
