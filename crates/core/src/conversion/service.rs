//! Conversions priced from the live feed.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use super::calculator::{crypto_to_fiat_at, fiat_to_crypto_at};
use super::types::{ConversionDirection, ConversionResult};
use crate::pricing::PriceService;

/// Converts between fiat and crypto using live prices.
#[derive(Clone)]
pub struct Converter {
    prices: Arc<PriceService>,
}

impl Converter {
    /// Creates a converter backed by `prices`.
    #[must_use]
    pub const fn new(prices: Arc<PriceService>) -> Self {
        Self { prices }
    }

    /// The price service used for lookups.
    #[must_use]
    pub fn prices(&self) -> &PriceService {
        &self.prices
    }

    /// Converts `fiat_amount` of `fiat_currency` into `crypto_symbol`,
    /// deducting `fee_percent` first.
    pub async fn fiat_to_crypto(
        &self,
        fiat_amount: Decimal,
        crypto_symbol: &str,
        fiat_currency: &str,
        fee_percent: Decimal,
    ) -> ConversionResult {
        if fiat_amount <= Decimal::ZERO {
            return ConversionResult::zero();
        }
        let Some(price) = self.prices.get_price(crypto_symbol).await else {
            return ConversionResult::price_unavailable();
        };

        let result = fiat_to_crypto_at(fiat_amount, price, fiat_currency, fee_percent);
        debug!(
            crypto_symbol,
            fiat_currency,
            %fiat_amount,
            converted = %result.converted_amount,
            "Converted fiat to crypto"
        );
        result
    }

    /// Converts `crypto_amount` of `crypto_symbol` into `fiat_currency`,
    /// adding `fee_percent` on top.
    pub async fn crypto_to_fiat(
        &self,
        crypto_amount: Decimal,
        crypto_symbol: &str,
        fiat_currency: &str,
        fee_percent: Decimal,
    ) -> ConversionResult {
        if crypto_amount <= Decimal::ZERO {
            return ConversionResult::zero();
        }
        let Some(price) = self.prices.get_price(crypto_symbol).await else {
            return ConversionResult::price_unavailable();
        };

        let result = crypto_to_fiat_at(crypto_amount, price, fiat_currency, fee_percent);
        debug!(
            crypto_symbol,
            fiat_currency,
            %crypto_amount,
            converted = %result.converted_amount,
            "Converted crypto to fiat"
        );
        result
    }

    /// Converts `amount` in whichever direction the user entered it.
    pub async fn convert(
        &self,
        direction: ConversionDirection,
        amount: Decimal,
        crypto_symbol: &str,
        fiat_currency: &str,
        fee_percent: Decimal,
    ) -> ConversionResult {
        match direction {
            ConversionDirection::FiatToCrypto => {
                self.fiat_to_crypto(amount, crypto_symbol, fiat_currency, fee_percent)
                    .await
            }
            ConversionDirection::CryptoToFiat => {
                self.crypto_to_fiat(amount, crypto_symbol, fiat_currency, fee_percent)
                    .await
            }
        }
    }
}
