pub mod request_id;

use axum::{http::Method, middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{
    gallery::{GalleryController, FRAGMENT_PATH},
    health,
    instagram::InstagramController,
};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn create_app(
    config: Arc<Config>,
    instagram_controller: Arc<InstagramController>,
    gallery_controller: Arc<GalleryController>,
) -> Router {
    // Feed endpoint (public, read-only, cacheable by any origin)
    let instagram_routes = Router::new()
        .route("/api/instagram", get(InstagramController::get_media))
        .with_state(instagram_controller)
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(Any),
        );

    // Server-rendered gallery
    let gallery_routes = Router::new()
        .route("/gallery", get(GalleryController::page))
        .route(FRAGMENT_PATH, get(GalleryController::fragment))
        .with_state(gallery_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(instagram_routes)
        .merge(gallery_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
