//! Static fiat exchange-rate table.
//!
//! Rates are expressed as units of the currency per one unit of the base
//! currency (GBP) and only change with a redeploy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// The currency live crypto prices are quoted in.
pub const BASE_CURRENCY: &str = "GBP";

/// A supported fiat currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiatCurrency {
    /// Currency code (ISO 4217).
    pub code: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Units of this currency per one GBP.
    pub rate: Decimal,
}

#[rustfmt::skip]
static CURRENCIES: [FiatCurrency; 12] = [
    FiatCurrency { code: "GBP", symbol: "£", rate: dec!(1.0) },
    FiatCurrency { code: "USD", symbol: "$", rate: dec!(1.27) },
    FiatCurrency { code: "EUR", symbol: "€", rate: dec!(1.17) },
    FiatCurrency { code: "NGN", symbol: "₦", rate: dec!(2050.00) },
    FiatCurrency { code: "GHS", symbol: "₵", rate: dec!(19.50) },
    FiatCurrency { code: "KES", symbol: "KSh", rate: dec!(164.00) },
    FiatCurrency { code: "ZAR", symbol: "R", rate: dec!(23.40) },
    FiatCurrency { code: "CAD", symbol: "C$", rate: dec!(1.73) },
    FiatCurrency { code: "AUD", symbol: "A$", rate: dec!(1.93) },
    FiatCurrency { code: "INR", symbol: "₹", rate: dec!(106.20) },
    FiatCurrency { code: "JPY", symbol: "¥", rate: dec!(191.00) },
    FiatCurrency { code: "AED", symbol: "د.إ", rate: dec!(4.66) },
];

/// Looks up a supported currency, ignoring case.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static FiatCurrency> {
    let code = code.trim();
    CURRENCIES
        .iter()
        .find(|currency| currency.code.eq_ignore_ascii_case(code))
}

/// Rate of `code` against the base currency.
///
/// Unknown codes fall back to `1`, i.e. they are treated as if they were the
/// base currency. Callers that need to reject unknown codes should check
/// [`is_supported`] first.
#[must_use]
pub fn rate_of(code: &str) -> Decimal {
    lookup(code).map_or(Decimal::ONE, |currency| currency.rate)
}

/// Returns true if `code` is in the table.
#[must_use]
pub fn is_supported(code: &str) -> bool {
    lookup(code).is_some()
}

/// Every supported currency, base currency first.
#[must_use]
pub fn supported_currencies() -> &'static [FiatCurrency] {
    &CURRENCIES
}
