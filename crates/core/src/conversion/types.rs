//! Conversion result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error text carried by a result when no price could be obtained.
pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

/// Which side of the pair the user entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    /// Amount is fiat; result is crypto.
    FiatToCrypto,
    /// Amount is crypto; result is fiat.
    CryptoToFiat,
}

/// Outcome of a single conversion.
///
/// Invalid input yields an all-zero result with no error; a missing price
/// yields an all-zero result with `error` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Amount on the other side of the pair.
    pub converted_amount: Decimal,
    /// Price of one crypto unit in the requested fiat currency.
    pub price_per_unit: Decimal,
    /// Fee, in fiat.
    pub fee_amount: Decimal,
    /// Fiat amount after the fee is taken out (buy) or the fiat value (sell).
    pub net_amount: Decimal,
    /// Fiat paid (buy) or fiat value plus fee (sell).
    pub total_with_fee: Decimal,
    /// Set when the conversion could not be priced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    /// All-zero result without an error.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            converted_amount: Decimal::ZERO,
            price_per_unit: Decimal::ZERO,
            fee_amount: Decimal::ZERO,
            net_amount: Decimal::ZERO,
            total_with_fee: Decimal::ZERO,
            error: None,
        }
    }

    /// All-zero result flagged with [`PRICE_UNAVAILABLE`].
    #[must_use]
    pub fn price_unavailable() -> Self {
        Self {
            error: Some(PRICE_UNAVAILABLE.to_string()),
            ..Self::zero()
        }
    }

    /// Returns true if the result carries no error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true if every amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.converted_amount.is_zero()
            && self.price_per_unit.is_zero()
            && self.fee_amount.is_zero()
            && self.net_amount.is_zero()
            && self.total_with_fee.is_zero()
    }
}

impl Default for ConversionResult {
    fn default() -> Self {
        Self::zero()
    }
}
