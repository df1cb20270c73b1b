//! Conversion logic for Pricedesk.
//!
//! This crate contains pure conversion logic with ZERO web dependencies.
//! Live prices come in through the `PriceSource` trait from
//! `pricedesk-shared`.
//!
//! # Modules
//!
//! - `currency` - Fiat rate table, symbols, rounding and formatting
//! - `pricing` - Live price lookups with a short-lived cache
//! - `conversion` - Fiat ⇄ crypto conversion with fee application
//! - `balance` - Balance validation for requested amounts

pub mod balance;
pub mod conversion;
pub mod currency;
pub mod pricing;

pub use balance::{BalanceCheck, validate_balance};
pub use conversion::{ConversionDirection, ConversionResult, Converter};
pub use pricing::PriceService;
