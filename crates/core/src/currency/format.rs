//! Amount parsing, rounding, and display formatting.
//!
//! Rounding uses banker's rounding (round half to even) everywhere so that
//! displayed and computed amounts agree.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::exchange::lookup;

/// Decimal places shown for fiat amounts.
pub const FIAT_DECIMALS: u32 = 2;

/// Decimal places shown for crypto amounts.
pub const CRYPTO_DECIMALS: u32 = 8;

/// Rounds `value` to `decimal_places` using banker's rounding.
#[must_use]
pub fn round_dp(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Rounds `value` to exactly `decimal_places`, padding with trailing zeros so
/// that serialized amounts keep a fixed width (`2.5` becomes `2.50`).
#[must_use]
pub fn to_fixed(value: Decimal, decimal_places: u32) -> Decimal {
    let mut fixed = round_dp(value, decimal_places);
    fixed.rescale(decimal_places);
    fixed
}

/// Parses user-entered amount text.
///
/// Accepts plain (`"12.5"`) and scientific (`"1.25e1"`) notation. Anything
/// else, including `NaN` and `Infinity`, yields `None`.
#[must_use]
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Display symbol for a fiat currency code.
///
/// Unknown codes are returned unchanged so they can still be shown.
#[must_use]
pub fn symbol_of(code: &str) -> String {
    lookup(code).map_or_else(|| code.to_string(), |currency| currency.symbol.to_string())
}

/// Formats a fiat amount as symbol followed by two decimals, e.g. `£12.50`.
#[must_use]
pub fn format_fiat(amount: Decimal, code: &str) -> String {
    format!(
        "{}{:.2}",
        symbol_of(code),
        round_dp(amount, FIAT_DECIMALS)
    )
}

/// Formats a crypto amount with eight decimals and the symbol, e.g.
/// `0.00195000 BTC`.
#[must_use]
pub fn format_crypto(amount: Decimal, symbol: &str) -> String {
    format!("{:.8} {symbol}", round_dp(amount, CRYPTO_DECIMALS))
}
