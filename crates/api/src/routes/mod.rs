//! API route definitions.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pricedesk_core::currency::parse_amount;
use pricedesk_shared::AppError;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

pub mod balance;
pub mod conversions;
pub mod currencies;
pub mod health;
pub mod prices;

/// Creates the API router with all routes.
pub fn api_routes() -> axum::Router<AppState> {
    axum::Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(prices::routes())
        .merge(conversions::routes())
        .merge(balance::routes())
}

/// Builds the JSON error response for `err`.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

/// An amount as sent by clients: either a JSON string or a JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// `"12.50"`
    Text(String),
    /// `12.5`
    Number(serde_json::Number),
}

impl AmountInput {
    /// Parses the amount; `None` for anything that is not a finite decimal.
    #[must_use]
    pub fn parse(&self) -> Option<Decimal> {
        match self {
            Self::Text(text) => parse_amount(text),
            Self::Number(number) => parse_amount(&number.to_string()),
        }
    }
}

/// Parses a field that must be a valid decimal when present.
pub(crate) fn required_decimal(field: &str, input: &AmountInput) -> Result<Decimal, AppError> {
    input
        .parse()
        .ok_or_else(|| AppError::Validation(format!("{field} must be a decimal number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(r#""12.50""#, Some(dec!(12.50)))]
    #[case("12.5", Some(dec!(12.5)))]
    #[case("100", Some(dec!(100)))]
    #[case(r#""abc""#, None)]
    #[case(r#""NaN""#, None)]
    #[case(r#""""#, None)]
    fn test_amount_input_parse(#[case] json: &str, #[case] expected: Option<Decimal>) {
        let input: AmountInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.parse(), expected);
    }

    #[test]
    fn test_required_decimal_error() {
        let input = AmountInput::Text("x".into());
        let err = required_decimal("available", &input).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("available"));
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(&AppError::NotFound("x".into()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(&AppError::Validation("x".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
