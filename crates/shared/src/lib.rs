//! Shared configuration, errors, and the live price feed for Pricedesk.
//!
//! This crate provides what every other crate leans on:
//! - Application-wide error types
//! - Configuration management
//! - The `PriceSource` seam and its HTTP implementation

pub mod config;
pub mod error;
pub mod price_feed;

pub use config::{AppConfig, PriceFeedConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use price_feed::{HttpPriceFeed, PriceFeedError, PriceSnapshot, PriceSource};
