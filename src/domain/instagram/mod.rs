pub mod error;
pub mod model;
pub mod service;

use async_trait::async_trait;

pub use error::InstagramServiceError;
pub use model::{AccessToken, MediaPage, MediaType, Post, RawMedia};
pub use service::{InstagramService, InstagramServiceApi};

/// Source of raw media for the account the token belongs to.
///
/// Errors are plain descriptions safe to hand to clients; implementations
/// must keep the token out of them.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn fetch_media(&self, access_token: &AccessToken) -> Result<MediaPage, String>;
}
