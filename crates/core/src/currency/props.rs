//! Property-based tests for rate lookup and formatting.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::exchange::{rate_of, supported_currencies};
use super::format::{format_crypto, format_fiat, parse_amount, round_dp, symbol_of};

/// Strategy to generate amounts (-1,000,000.0000 to 1,000,000.0000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick a supported currency code.
fn supported_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(
        supported_currencies()
            .iter()
            .map(|c| c.code)
            .collect::<Vec<_>>(),
    )
}

/// Digits after the decimal point of a formatted number.
fn fraction_len(formatted: &str) -> usize {
    formatted.rsplit_once('.').map_or(0, |(_, frac)| {
        frac.chars().take_while(char::is_ascii_digit).count()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every supported code has a positive rate and a non-empty symbol.
    #[test]
    fn prop_supported_rates_positive(code in supported_code()) {
        prop_assert!(rate_of(code) > Decimal::ZERO);
        prop_assert!(!symbol_of(code).is_empty());
    }

    /// Codes outside the table resolve to rate 1 and echo as their own symbol.
    #[test]
    fn prop_unknown_codes_fall_back(code in "[Q-X]{4}") {
        prop_assert_eq!(rate_of(&code), Decimal::ONE);
        prop_assert_eq!(symbol_of(&code), code);
    }

    /// Fiat formatting always shows the symbol and exactly 2 decimals.
    #[test]
    fn prop_format_fiat_two_decimals(value in amount(), code in supported_code()) {
        let formatted = format_fiat(value, code);
        prop_assert!(formatted.starts_with(&symbol_of(code)));
        prop_assert_eq!(fraction_len(&formatted), 2, "{}", formatted);
    }

    /// Crypto formatting always shows exactly 8 decimals and the symbol suffix.
    #[test]
    fn prop_format_crypto_eight_decimals(value in amount()) {
        let formatted = format_crypto(value, "BTC");
        prop_assert!(formatted.ends_with(" BTC"));
        let number = formatted.trim_end_matches(" BTC");
        prop_assert_eq!(fraction_len(number), 8, "{}", formatted);
        prop_assert_eq!(parse_amount(number), Some(round_dp(value, 8)));
    }

    /// Rounding is idempotent.
    #[test]
    fn prop_round_idempotent(value in amount(), dp in 0u32..=8) {
        let once = round_dp(value, dp);
        prop_assert_eq!(round_dp(once, dp), once);
        prop_assert!(once.scale() <= dp);
    }
}
