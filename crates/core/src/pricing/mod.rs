//! Live crypto prices with a short-lived cache.
//!
//! [`PriceService`] answers `get_price(symbol)` from its cache while the
//! entry is inside the freshness window and otherwise asks the injected
//! [`PriceSource`](pricedesk_shared::PriceSource). Failures are logged and
//! surface as `None`, never as an error.

pub mod cache;
pub mod clock;
pub mod service;

pub use cache::{DEFAULT_FRESHNESS_SECS, PriceCache, PriceCacheEntry};
pub use clock::{Clock, ManualClock, SystemClock};
pub use service::PriceService;
