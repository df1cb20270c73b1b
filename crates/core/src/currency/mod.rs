//! Fiat currencies: the static rate table, formatting, and rounding.

pub mod exchange;
pub mod format;

#[cfg(test)]
mod props;

pub use exchange::{BASE_CURRENCY, FiatCurrency, is_supported, rate_of, supported_currencies};
pub use format::{
    CRYPTO_DECIMALS, FIAT_DECIMALS, format_crypto, format_fiat, parse_amount, round_dp, symbol_of,
    to_fixed,
};
