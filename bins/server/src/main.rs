//! Pricedesk API Server
//!
//! Main entry point for the Pricedesk conversion service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricedesk_api::{AppState, create_router};
use pricedesk_core::{Converter, PriceService};
use pricedesk_shared::{AppConfig, HttpPriceFeed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricedesk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create price feed and cache
    let feed = HttpPriceFeed::new(&config.price_feed)?;
    info!(
        url = %feed.url(),
        freshness_secs = config.price_feed.freshness_secs,
        timeout_secs = config.price_feed.request_timeout_secs,
        "Price feed configured"
    );
    let prices = PriceService::with_freshness(Arc::new(feed), config.price_feed.freshness_window());

    // Create application state
    let state = AppState::new(Converter::new(Arc::new(prices)));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
