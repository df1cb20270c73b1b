//! Conversion quote routes.
//!
//! Quotes never fail with an HTTP error for bad amounts or a missing price:
//! the result carries zeros and, for a missing price, an `error` field.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use pricedesk_core::currency::{format_crypto, format_fiat};
use pricedesk_core::{ConversionDirection, ConversionResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AmountInput, error_response, required_decimal};
use crate::AppState;

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/conversions", post(create_conversion))
}

/// Request body for a conversion quote.
#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    /// Which side `amount` is on.
    pub direction: ConversionDirection,
    /// Amount entered by the user.
    pub amount: Option<AmountInput>,
    /// Crypto symbol, e.g. `BTC`.
    pub crypto_symbol: String,
    /// Fiat currency code, e.g. `GBP`.
    pub fiat_currency: String,
    /// Fee percentage (defaults to 0).
    pub fee_percent: Option<AmountInput>,
}

/// Human-readable renderings of a result.
#[derive(Debug, Serialize)]
pub struct FormattedAmounts {
    /// Converted amount with its symbol.
    pub converted: String,
    /// Price per unit in the fiat currency.
    pub price_per_unit: String,
    /// Fee in the fiat currency.
    pub fee: String,
    /// Net fiat amount.
    pub net: String,
    /// Total fiat amount including the fee.
    pub total_with_fee: String,
}

impl FormattedAmounts {
    fn new(
        result: &ConversionResult,
        direction: ConversionDirection,
        crypto_symbol: &str,
        fiat_currency: &str,
    ) -> Self {
        let converted = match direction {
            ConversionDirection::FiatToCrypto => {
                format_crypto(result.converted_amount, crypto_symbol)
            }
            ConversionDirection::CryptoToFiat => format_fiat(result.converted_amount, fiat_currency),
        };

        Self {
            converted,
            price_per_unit: format_fiat(result.price_per_unit, fiat_currency),
            fee: format_fiat(result.fee_amount, fiat_currency),
            net: format_fiat(result.net_amount, fiat_currency),
            total_with_fee: format_fiat(result.total_with_fee, fiat_currency),
        }
    }
}

/// Response for a conversion quote.
#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    /// Direction of the conversion.
    pub direction: ConversionDirection,
    /// Upper-cased crypto symbol.
    pub crypto_symbol: String,
    /// Upper-cased fiat currency code.
    pub fiat_currency: String,
    /// Raw amounts.
    #[serde(flatten)]
    pub result: ConversionResult,
    /// Display strings.
    pub formatted: FormattedAmounts,
}

/// POST `/conversions` - Quote a fiat ⇄ crypto conversion.
async fn create_conversion(
    State(state): State<AppState>,
    Json(payload): Json<ConversionRequest>,
) -> impl IntoResponse {
    let fee_percent = match payload.fee_percent.as_ref() {
        Some(input) => match required_decimal("fee_percent", input) {
            Ok(fee) => fee,
            Err(e) => return error_response(&e),
        },
        None => Decimal::ZERO,
    };

    // Unparseable amounts are treated like zero: the quote comes back empty.
    let amount = payload
        .amount
        .as_ref()
        .and_then(AmountInput::parse)
        .unwrap_or(Decimal::ZERO);

    let crypto_symbol = payload.crypto_symbol.trim().to_ascii_uppercase();
    let fiat_currency = payload.fiat_currency.trim().to_ascii_uppercase();

    let result = state
        .converter
        .convert(
            payload.direction,
            amount,
            &crypto_symbol,
            &fiat_currency,
            fee_percent,
        )
        .await;

    if let Some(error) = &result.error {
        info!(crypto_symbol = %crypto_symbol, error = %error, "Conversion quote without price");
    }

    let formatted = FormattedAmounts::new(&result, payload.direction, &crypto_symbol, &fiat_currency);
    let response = ConversionResponse {
        direction: payload.direction,
        crypto_symbol,
        fiat_currency,
        result,
        formatted,
    };

    (StatusCode::OK, Json(response)).into_response()
}
