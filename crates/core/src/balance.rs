//! Balance checks for withdrawal and trade amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{CRYPTO_DECIMALS, FIAT_DECIMALS, round_dp};

/// Message shown when the requested amount is not a positive number.
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount";

/// Result of a balance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceCheck {
    /// Whether the amount can be spent.
    pub valid: bool,
    /// Reason when invalid, empty otherwise.
    pub message: String,
}

impl BalanceCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Checks `amount` against the `available` balance.
///
/// The available balance in the message is shown with 8 decimals for crypto
/// and 2 for fiat.
#[must_use]
pub fn validate_balance(amount: Decimal, available: Decimal, is_crypto: bool) -> BalanceCheck {
    if amount <= Decimal::ZERO {
        return BalanceCheck::rejected(INVALID_AMOUNT_MESSAGE);
    }

    if amount > available {
        let available = if is_crypto {
            format!("{:.8}", round_dp(available, CRYPTO_DECIMALS))
        } else {
            format!("{:.2}", round_dp(available, FIAT_DECIMALS))
        };
        return BalanceCheck::rejected(format!("Insufficient balance. Available: {available}"));
    }

    BalanceCheck::ok()
}
