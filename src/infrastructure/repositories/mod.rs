pub mod feed_endpoint_repository;
pub mod graph_media_repository;

pub use feed_endpoint_repository::FeedEndpointRepository;
pub use graph_media_repository::{GraphMediaRepository, MEDIA_FIELDS};
