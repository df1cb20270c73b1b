//! Price lookup service combining the cache with a live source.

use std::sync::Arc;
use std::time::Duration;

use pricedesk_shared::PriceSource;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::cache::{PriceCache, PriceCacheEntry};
use super::clock::{Clock, SystemClock};

/// Looks up crypto prices in the base currency.
///
/// Constructed once and shared (behind `Arc`) by every caller; the cache it
/// owns is the only process-wide price state.
pub struct PriceService {
    source: Arc<dyn PriceSource>,
    clock: Arc<dyn Clock>,
    cache: PriceCache,
}

impl PriceService {
    /// Creates a service with the wall clock and a 30 second window.
    #[must_use]
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self::with_clock(source, Arc::new(SystemClock), PriceCache::new())
    }

    /// Creates a service with a custom freshness window.
    #[must_use]
    pub fn with_freshness(source: Arc<dyn PriceSource>, freshness: Duration) -> Self {
        Self::with_clock(
            source,
            Arc::new(SystemClock),
            PriceCache::with_freshness(freshness),
        )
    }

    /// Creates a service with an injected clock and cache.
    #[must_use]
    pub fn with_clock(source: Arc<dyn PriceSource>, clock: Arc<dyn Clock>, cache: PriceCache) -> Self {
        Self {
            source,
            clock,
            cache,
        }
    }

    /// Returns the price of `symbol` in the base currency.
    ///
    /// Served from cache while fresh; otherwise the whole feed is fetched and
    /// every listed price is cached. Returns `None` when the feed fails or
    /// does not list the symbol.
    pub async fn get_price(&self, symbol: &str) -> Option<Decimal> {
        let symbol = symbol.trim().to_ascii_uppercase();

        if let Some(price) = self.cache.fresh_price(&symbol, self.clock.now()) {
            debug!(symbol = %symbol, %price, "Price served from cache");
            return Some(price);
        }

        let snapshot = match self.source.fetch_prices().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, symbol = %symbol, "Price feed request failed");
                return None;
            }
        };

        self.cache.store_snapshot(&snapshot, self.clock.now());

        let price = snapshot.get(&symbol);
        if price.is_none() {
            warn!(symbol = %symbol, "Symbol missing from price feed");
        }
        price
    }

    /// Returns the cached entry for `symbol` regardless of age.
    #[must_use]
    pub fn cached(&self, symbol: &str) -> Option<PriceCacheEntry> {
        self.cache.entry(&symbol.trim().to_ascii_uppercase())
    }

    /// Drops every cached price so the next lookup hits the feed.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of cached symbols.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.cache.entry_count()
    }
}
