//! Balance validation routes.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use pricedesk_core::validate_balance;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{AmountInput, error_response, required_decimal};
use crate::AppState;

/// Creates the balance routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/balance/validate", post(validate))
}

/// Request body for a balance check.
#[derive(Debug, Deserialize)]
pub struct ValidateBalanceRequest {
    /// Amount the user wants to spend.
    pub amount: Option<AmountInput>,
    /// Balance available to spend.
    pub available: AmountInput,
    /// Whether both amounts are crypto (8 decimals) rather than fiat.
    #[serde(default)]
    pub is_crypto: bool,
}

/// POST `/balance/validate` - Check an amount against an available balance.
async fn validate(Json(payload): Json<ValidateBalanceRequest>) -> impl IntoResponse {
    let available = match required_decimal("available", &payload.available) {
        Ok(available) => available,
        Err(e) => return error_response(&e),
    };

    let amount = payload
        .amount
        .as_ref()
        .and_then(AmountInput::parse)
        .unwrap_or(Decimal::ZERO);

    let check = validate_balance(amount, available, payload.is_crypto);
    (StatusCode::OK, Json(check)).into_response()
}
