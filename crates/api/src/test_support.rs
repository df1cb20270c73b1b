//! Helpers shared by the route tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::{Router, body::Body, response::Response};
use http_body_util::BodyExt;
use pricedesk_core::{Converter, PriceService};
use pricedesk_shared::{PriceFeedError, PriceSnapshot, PriceSource};
use rust_decimal_macros::dec;

use crate::{AppState, create_router};

/// Feed listing BTC at 50,000 GBP and ETH at 2,500 GBP; can be taken down.
#[derive(Default)]
pub struct StubFeed {
    pub down: AtomicBool,
}

#[async_trait]
impl PriceSource for StubFeed {
    async fn fetch_prices(&self) -> Result<PriceSnapshot, PriceFeedError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(PriceFeedError::Status(503));
        }
        Ok(PriceSnapshot::new([
            ("BTC", dec!(50000)),
            ("ETH", dec!(2500)),
        ]))
    }
}

/// Full application router over a stub feed.
pub fn test_app() -> (Arc<StubFeed>, AppState, Router) {
    let feed = Arc::new(StubFeed::default());
    let prices = Arc::new(PriceService::new(feed.clone()));
    let state = AppState::new(Converter::new(prices));
    let app = create_router(state.clone());
    (feed, state, app)
}

/// Collects a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Builds a JSON POST request.
pub fn post_json(uri: &str, body: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

/// Builds a GET request.
pub fn get(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}
