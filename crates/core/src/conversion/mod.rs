//! Fiat ⇄ crypto conversion with fee application.
//!
//! The two directions apply the fee differently:
//! - buying crypto (`fiat_to_crypto`) takes the fee out of the fiat spent;
//! - selling crypto (`crypto_to_fiat`) adds the fee on top of the fiat value.
//!
//! Failures are encoded in [`ConversionResult`], never raised.

pub mod calculator;
pub mod service;
pub mod types;


pub use calculator::{crypto_to_fiat_at, fiat_to_crypto_at};
pub use service::Converter;
pub use types::{ConversionDirection, ConversionResult, PRICE_UNAVAILABLE};
