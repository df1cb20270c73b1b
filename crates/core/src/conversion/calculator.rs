//! Conversion arithmetic at a known price.
//!
//! These functions never look a price up; [`Converter`](super::Converter)
//! does that and then delegates here.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::ConversionResult;
use crate::currency::{CRYPTO_DECIMALS, FIAT_DECIMALS, rate_of, to_fixed};

const HUNDRED: Decimal = dec!(100);

/// Price of one crypto unit in `fiat_currency`, or `None` if it is not
/// usable as a divisor.
fn price_in(price_in_base: Decimal, fiat_currency: &str) -> Option<Decimal> {
    price_in_base
        .checked_mul(rate_of(fiat_currency))
        .filter(|price| *price > Decimal::ZERO)
}

fn fee_on(amount: Decimal, fee_percent: Decimal) -> Option<Decimal> {
    amount.checked_mul(fee_percent)?.checked_div(HUNDRED)
}

/// Converts fiat into crypto at `price_in_base`.
///
/// The fee is deducted from the fiat amount before converting:
/// `converted = (fiat - fiat * fee%) / price`.
#[must_use]
pub fn fiat_to_crypto_at(
    fiat_amount: Decimal,
    price_in_base: Decimal,
    fiat_currency: &str,
    fee_percent: Decimal,
) -> ConversionResult {
    if fiat_amount <= Decimal::ZERO {
        return ConversionResult::zero();
    }
    let Some(price) = price_in(price_in_base, fiat_currency) else {
        return ConversionResult::price_unavailable();
    };

    let compute = || {
        let fee = fee_on(fiat_amount, fee_percent)?;
        let net = fiat_amount.checked_sub(fee)?;
        let converted = net.checked_div(price)?;
        Some(ConversionResult {
            converted_amount: to_fixed(converted, CRYPTO_DECIMALS),
            price_per_unit: price,
            fee_amount: to_fixed(fee, FIAT_DECIMALS),
            net_amount: to_fixed(net, FIAT_DECIMALS),
            total_with_fee: fiat_amount,
            error: None,
        })
    };

    compute().unwrap_or_else(ConversionResult::zero)
}

/// Converts crypto into fiat at `price_in_base`.
///
/// The fee is added on top of the fiat value:
/// `total = crypto * price + (crypto * price) * fee%`.
#[must_use]
pub fn crypto_to_fiat_at(
    crypto_amount: Decimal,
    price_in_base: Decimal,
    fiat_currency: &str,
    fee_percent: Decimal,
) -> ConversionResult {
    if crypto_amount <= Decimal::ZERO {
        return ConversionResult::zero();
    }
    let Some(price) = price_in(price_in_base, fiat_currency) else {
        return ConversionResult::price_unavailable();
    };

    let compute = || {
        let fiat_value = crypto_amount.checked_mul(price)?;
        let fee = fee_on(fiat_value, fee_percent)?;
        let total = fiat_value.checked_add(fee)?;
        let fiat_value = to_fixed(fiat_value, FIAT_DECIMALS);
        Some(ConversionResult {
            converted_amount: fiat_value,
            price_per_unit: price,
            fee_amount: to_fixed(fee, FIAT_DECIMALS),
            net_amount: fiat_value,
            total_with_fee: to_fixed(total, FIAT_DECIMALS),
            error: None,
        })
    };

    compute().unwrap_or_else(ConversionResult::zero)
}
