//! Live price routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use pricedesk_core::currency::{BASE_CURRENCY, rate_of};
use pricedesk_shared::AppError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error_response;
use crate::AppState;

/// Creates the price routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/prices/{symbol}", get(get_price))
        .route("/prices/cache", delete(clear_cache))
}

/// Query parameters for a price lookup.
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    /// Fiat currency to quote in (defaults to the base currency).
    pub currency: Option<String>,
}

/// Response for a price lookup.
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    /// Upper-cased crypto symbol.
    pub symbol: String,
    /// Currency `price` is quoted in.
    pub base_currency: &'static str,
    /// Price of one unit in the base currency.
    pub price: String,
    /// Requested fiat currency.
    pub currency: String,
    /// Price of one unit in the requested currency.
    pub price_in_currency: String,
}

/// GET `/prices/{symbol}` - Current price of a crypto symbol.
async fn get_price(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<PriceQuery>,
) -> impl IntoResponse {
    let symbol = symbol.to_ascii_uppercase();
    let currency = query
        .currency
        .map_or_else(|| BASE_CURRENCY.to_string(), |c| c.to_ascii_uppercase());

    let Some(price) = state.converter.prices().get_price(&symbol).await else {
        warn!(symbol = %symbol, "Price lookup failed");
        return error_response(&AppError::NotFound(format!("price for {symbol}")));
    };

    let Some(price_in_currency) = price.checked_mul(rate_of(&currency)) else {
        return error_response(&AppError::Internal(format!(
            "price for {symbol} overflows in {currency}"
        )));
    };

    let response = PriceResponse {
        price_in_currency: price_in_currency.to_string(),
        price: price.to_string(),
        symbol,
        base_currency: BASE_CURRENCY,
        currency,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// DELETE `/prices/cache` - Drop every cached price.
async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    let prices = state.converter.prices();
    let dropped = prices.entry_count();
    prices.invalidate_all();
    info!(dropped, "Price cache cleared");
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::test_support::{body_json, get, test_app};

    #[tokio::test]
    async fn test_get_price_in_base_currency() {
        let (_feed, _state, app) = test_app();

        let response = app.oneshot(get("/api/v1/prices/btc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["symbol"], "BTC");
        assert_eq!(body["base_currency"], "GBP");
        assert_eq!(body["currency"], "GBP");
        assert_eq!(body["price"], "50000");
    }

    #[tokio::test]
    async fn test_get_price_in_other_currency() {
        let (_feed, _state, app) = test_app();

        let response = app
            .oneshot(get("/api/v1/prices/BTC?currency=usd"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["price_in_currency"], "63500.00");
    }

    #[tokio::test]
    async fn test_unlisted_symbol_is_not_found() {
        let (_feed, _state, app) = test_app();

        let response = app.oneshot(get("/api/v1/prices/DOGE")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_feed_down_is_not_found() {
        let (feed, _state, app) = test_app();
        feed.down.store(true, Ordering::SeqCst);

        let response = app.oneshot(get("/api/v1/prices/BTC")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_clear_cache() {
        let (_feed, state, app) = test_app();
        state.converter.prices().get_price("BTC").await;
        assert_eq!(state.converter.prices().entry_count(), 2);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/prices/cache")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.converter.prices().entry_count(), 0);
    }
}
