//! Per-symbol price cache.
//!
//! Entries are overwritten by each successful fetch and are never evicted on
//! their own; freshness is decided at read time against the caller's clock.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use pricedesk_shared::PriceSnapshot;
use rust_decimal::Decimal;

/// Default freshness window for cached prices (30 seconds).
pub const DEFAULT_FRESHNESS_SECS: u64 = 30;

/// A cached price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCacheEntry {
    /// Upper-cased crypto symbol.
    pub symbol: String,
    /// Price in the base currency.
    pub price: Decimal,
    /// When the price was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl PriceCacheEntry {
    /// Age of the entry at `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.fetched_at
    }
}

/// Cache for live prices.
///
/// Thread-safe and suitable for concurrent access; concurrent writers for the
/// same symbol simply overwrite each other.
#[derive(Debug)]
pub struct PriceCache {
    entries: DashMap<String, PriceCacheEntry>,
    freshness: TimeDelta,
}

impl PriceCache {
    /// Creates a price cache with the default 30 second freshness window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_freshness(Duration::from_secs(DEFAULT_FRESHNESS_SECS))
    }

    /// Creates a price cache with a custom freshness window.
    #[must_use]
    pub fn with_freshness(freshness: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            freshness: TimeDelta::from_std(freshness).unwrap_or(TimeDelta::MAX),
        }
    }

    /// The freshness window.
    #[must_use]
    pub const fn freshness(&self) -> TimeDelta {
        self.freshness
    }

    /// Returns the cached price for `symbol` if it is younger than the
    /// freshness window at `now`.
    #[must_use]
    pub fn fresh_price(&self, symbol: &str, now: DateTime<Utc>) -> Option<Decimal> {
        self.entries
            .get(symbol)
            .filter(|entry| entry.age(now) < self.freshness)
            .map(|entry| entry.price)
    }

    /// Returns the cached entry for `symbol` regardless of age.
    #[must_use]
    pub fn entry(&self, symbol: &str) -> Option<PriceCacheEntry> {
        self.entries.get(symbol).map(|entry| entry.value().clone())
    }

    /// Stores one price.
    pub fn insert(&self, symbol: &str, price: Decimal, fetched_at: DateTime<Utc>) {
        let symbol = symbol.to_ascii_uppercase();
        self.entries.insert(
            symbol.clone(),
            PriceCacheEntry {
                symbol,
                price,
                fetched_at,
            },
        );
    }

    /// Stores every price of a snapshot under the same fetch time.
    pub fn store_snapshot(&self, snapshot: &PriceSnapshot, fetched_at: DateTime<Utc>) {
        for (symbol, price) in snapshot.iter() {
            self.insert(symbol, price, fetched_at);
        }
    }

    /// Drops every entry.
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }

    /// Returns the number of cached symbols.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_fresh_within_window() {
        let cache = PriceCache::new();
        cache.insert("BTC", dec!(50000), t0());

        assert_eq!(cache.fresh_price("BTC", t0()), Some(dec!(50000)));
        assert_eq!(
            cache.fresh_price("BTC", t0() + TimeDelta::seconds(29)),
            Some(dec!(50000))
        );
    }

    #[test]
    fn test_stale_at_window_boundary() {
        let cache = PriceCache::new();
        cache.insert("BTC", dec!(50000), t0());

        assert_eq!(cache.fresh_price("BTC", t0() + TimeDelta::seconds(30)), None);
        // Stale entries are kept until overwritten.
        assert_eq!(cache.entry("BTC").map(|e| e.price), Some(dec!(50000)));
    }

    #[test]
    fn test_missing_symbol() {
        let cache = PriceCache::new();
        assert_eq!(cache.fresh_price("ETH", t0()), None);
        assert!(cache.entry("ETH").is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let cache = PriceCache::new();
        cache.insert("btc", dec!(1), t0());
        cache.insert("BTC", dec!(2), t0() + TimeDelta::seconds(5));

        let entry = cache.entry("BTC").unwrap();
        assert_eq!(entry.symbol, "BTC");
        assert_eq!(entry.price, dec!(2));
        assert_eq!(entry.fetched_at, t0() + TimeDelta::seconds(5));
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn test_store_snapshot_and_invalidate_all() {
        let cache = PriceCache::default();
        let snapshot = PriceSnapshot::new([("BTC", dec!(50000)), ("ETH", dec!(2500))]);
        cache.store_snapshot(&snapshot, t0());

        assert_eq!(cache.entry_count(), 2);
        assert_eq!(cache.fresh_price("ETH", t0()), Some(dec!(2500)));

        cache.invalidate_all();
        assert_eq!(cache.entry_count(), 0);
        assert_eq!(cache.fresh_price("BTC", t0()), None);
    }

    #[test]
    fn test_custom_freshness() {
        let cache = PriceCache::with_freshness(Duration::from_secs(5));
        assert_eq!(cache.freshness(), TimeDelta::seconds(5));

        cache.insert("BTC", dec!(1), t0());
        assert!(cache.fresh_price("BTC", t0() + TimeDelta::seconds(4)).is_some());
        assert!(cache.fresh_price("BTC", t0() + TimeDelta::seconds(5)).is_none());
    }
}
