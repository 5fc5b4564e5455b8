use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use instagram_gallery::controllers::{gallery::GalleryController, instagram::InstagramController};
use instagram_gallery::domain::gallery::InstagramProfile;
use instagram_gallery::domain::instagram::InstagramService;
use instagram_gallery::infrastructure::config::{Config, LogFormat};
use instagram_gallery::infrastructure::http::{create_app, start_http_server};
use instagram_gallery::infrastructure::repositories::{
    FeedEndpointRepository, GraphMediaRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting Instagram gallery on {}:{}",
        config.host,
        config.port
    );

    if !config.instagram.is_configured() {
        tracing::warn!("INSTAGRAM_TOKEN missing or placeholder, /api/instagram will answer 500");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    tracing::info!("Instantiating repositories...");
    let media_repo = Arc::new(GraphMediaRepository::new(
        config.instagram.graph_url.clone(),
        config.instagram.timeout(),
    )?);
    let feed_source = Arc::new(FeedEndpointRepository::new(
        config.gallery.feed_url.clone(),
        config.gallery.fetch_timeout(),
    )?);

    // 2. Services
    tracing::info!("Instantiating services...");
    let instagram_service = Arc::new(InstagramService::new(
        media_repo,
        config.instagram.access_token.clone(),
    ));

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let instagram_controller = Arc::new(InstagramController::new(instagram_service));
    let gallery_controller = Arc::new(GalleryController::new(
        feed_source,
        InstagramProfile::new(config.gallery.profile_handle.clone()),
    ));

    let app = create_app(config.clone(), instagram_controller, gallery_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "instagram_gallery=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "instagram_gallery=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
