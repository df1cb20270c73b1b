//! Live crypto price feed client.
//!
//! The feed answers a single parameterless `GET` with every listed price,
//! quoted in the base currency (GBP):
//!
//! ```text
//! { "success": true, "prices": { "BTC": { "price_gbp": 51234.5, ... }, ... } }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::PriceFeedConfig;

/// Price feed errors.
#[derive(Debug, Error)]
pub enum PriceFeedError {
    /// The request could not be sent or the connection failed.
    #[error("price feed request failed: {0}")]
    Request(String),
    /// The feed answered with a non-success HTTP status.
    #[error("price feed returned HTTP {0}")]
    Status(u16),
    /// The body was not the expected JSON document.
    #[error("price feed response could not be decoded: {0}")]
    Decode(String),
    /// The feed reported `success: false`.
    #[error("price feed reported success: false")]
    Unsuccessful,
}

impl From<reqwest::Error> for PriceFeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Prices returned by one fetch, keyed by upper-cased symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSnapshot {
    prices: HashMap<String, Decimal>,
}

impl PriceSnapshot {
    /// Creates a snapshot from `(symbol, price)` pairs.
    pub fn new<I, S>(prices: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        Self {
            prices: prices
                .into_iter()
                .map(|(symbol, price)| (symbol.as_ref().to_ascii_uppercase(), price))
                .collect(),
        }
    }

    /// Price of `symbol` in the base currency, if listed.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<Decimal> {
        self.prices.get(&symbol.to_ascii_uppercase()).copied()
    }

    /// Iterates over all `(symbol, price)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.prices.iter().map(|(symbol, price)| (symbol.as_str(), *price))
    }

    /// Number of listed symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no symbol is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// A source of live prices in the base currency.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches the current price of every listed symbol.
    async fn fetch_prices(&self) -> Result<PriceSnapshot, PriceFeedError>;
}

#[derive(Debug, Deserialize)]
struct PricesResponse {
    success: bool,
    #[serde(default)]
    prices: HashMap<String, PriceEntry>,
}

#[derive(Debug, Deserialize)]
struct PriceEntry {
    #[serde(default)]
    price_gbp: Option<f64>,
}

impl PricesResponse {
    fn into_snapshot(self) -> Result<PriceSnapshot, PriceFeedError> {
        if !self.success {
            return Err(PriceFeedError::Unsuccessful);
        }

        let mut prices = HashMap::with_capacity(self.prices.len());
        for (symbol, entry) in self.prices {
            match entry.price_gbp.and_then(Decimal::from_f64) {
                Some(price) if price > Decimal::ZERO => {
                    prices.insert(symbol.to_ascii_uppercase(), price);
                }
                _ => warn!(symbol = %symbol, "Skipping feed entry without a usable GBP price"),
            }
        }

        Ok(PriceSnapshot { prices })
    }
}

/// Decodes a raw feed body into a snapshot.
///
/// # Errors
///
/// Returns [`PriceFeedError::Decode`] for malformed JSON and
/// [`PriceFeedError::Unsuccessful`] when the feed reports failure.
pub fn decode_prices(body: &[u8]) -> Result<PriceSnapshot, PriceFeedError> {
    let response: PricesResponse =
        serde_json::from_slice(body).map_err(|e| PriceFeedError::Decode(e.to_string()))?;
    response.into_snapshot()
}

/// HTTP-backed price source.
#[derive(Debug, Clone)]
pub struct HttpPriceFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpPriceFeed {
    /// Creates a feed client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &PriceFeedConfig) -> Result<Self, PriceFeedError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .gzip(true)
            .build()
            .map_err(|e| PriceFeedError::Request(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.trim().to_string(),
        })
    }

    /// The endpoint this feed polls.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PriceSource for HttpPriceFeed {
    async fn fetch_prices(&self) -> Result<PriceSnapshot, PriceFeedError> {
        debug!(url = %self.url, "Requesting live prices");

        let response = self
            .client
            .get(&self.url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceFeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let snapshot = decode_prices(&body)?;
        debug!(count = snapshot.len(), "Live prices received");
        Ok(snapshot)
    }
}
