//! Currency listing routes.

use axum::{Json, Router, routing::get};
use pricedesk_core::currency::{BASE_CURRENCY, supported_currencies};
use serde::Serialize;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response for a currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code (ISO 4217).
    pub code: &'static str,
    /// Currency symbol.
    pub symbol: &'static str,
    /// Units of this currency per one unit of the base currency.
    pub rate: String,
}

/// Response for the currency listing.
#[derive(Debug, Serialize)]
pub struct CurrencyListResponse {
    /// Currency crypto prices are quoted in.
    pub base_currency: &'static str,
    /// Every supported fiat currency.
    pub currencies: Vec<CurrencyResponse>,
}

/// GET `/currencies` - List all supported fiat currencies.
async fn list_currencies() -> Json<CurrencyListResponse> {
    let currencies = supported_currencies()
        .iter()
        .map(|c| CurrencyResponse {
            code: c.code,
            symbol: c.symbol,
            rate: c.rate.to_string(),
        })
        .collect();

    Json(CurrencyListResponse {
        base_currency: BASE_CURRENCY,
        currencies,
    })
}
