//! Fixed-point price normalization.
//!
//! The EVM has no fractional numbers, so a feed quote such as
//! `"2500.12345678"` is carried on-chain as an integer with 18 implied
//! decimals: the 8 fractional digits the feed reports, widened by a further
//! 10^10 so the value lines up with wei precision.
//!
//! ```
//! use ethoracle::domain::normalize_price;
//!
//! let price = normalize_price("2500.12345678").unwrap();
//! assert_eq!(price.to_string(), "2500123456780000000000");
//! ```

use std::fmt;

use alloy_primitives::U256;

use super::error::DomainError;

/// Fractional digits the feed reports.
pub const FEED_DECIMALS: usize = 8;

/// Multiplier applied to the feed significand (10^10).
pub const PRICE_SCALE: u64 = 10_000_000_000;

/// A non-negative price scaled to 18 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NormalizedPrice(U256);

impl NormalizedPrice {
    /// The fallback sentinel submitted when every attempt for a request failed.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wrap an already scaled on-chain value.
    #[must_use]
    pub const fn from_raw(value: U256) -> Self {
        Self(value)
    }

    /// The raw scaled value.
    #[must_use]
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for NormalizedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NormalizedPrice> for U256 {
    fn from(price: NormalizedPrice) -> Self {
        price.0
    }
}

/// Convert a feed decimal string into a [`NormalizedPrice`].
///
/// Accepts plain numerals with at most [`FEED_DECIMALS`] fractional digits.
/// Shorter fractions are padded, so `"2500.1"` and `"2500.10000000"` yield
/// the same value. Zero and negative quotes are rejected.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPrice`] for anything that is not a plain
/// decimal numeral and [`DomainError::NonPositivePrice`] for zero or negative
/// input.
pub fn normalize_price(raw: &str) -> Result<NormalizedPrice, DomainError> {
    let input = raw.trim();
    let invalid = |reason| DomainError::InvalidPrice {
        input: raw.to_string(),
        reason,
    };

    if input.starts_with('-') {
        return Err(DomainError::NonPositivePrice {
            input: raw.to_string(),
        });
    }

    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.is_empty() {
                return Err(invalid("missing fractional digits after '.'"));
            }
            (whole, fraction)
        }
        None => (input, ""),
    };

    if whole.is_empty() {
        return Err(invalid("missing integer digits"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid("only decimal digits and one '.' are allowed"));
    }
    if fraction.len() > FEED_DECIMALS {
        return Err(invalid("more than 8 fractional digits"));
    }

    let mut digits = String::with_capacity(whole.len() + FEED_DECIMALS);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat('0').take(FEED_DECIMALS - fraction.len()));

    let significand =
        U256::from_str_radix(&digits, 10).map_err(|_| invalid("value does not fit in 256 bits"))?;
    if significand.is_zero() {
        return Err(DomainError::NonPositivePrice {
            input: raw.to_string(),
        });
    }

    significand
        .checked_mul(U256::from(PRICE_SCALE))
        .map(NormalizedPrice)
        .ok_or_else(|| invalid("value does not fit in 256 bits"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(digits: &str) -> NormalizedPrice {
        NormalizedPrice::from_raw(U256::from_str_radix(digits, 10).unwrap())
    }

    #[test]
    fn normalizes_feed_precision_quote() {
        let price = normalize_price("2500.12345678").unwrap();
        assert_eq!(price, wei("2500123456780000000000"));
    }

    #[test]
    fn normalization_is_deterministic() {
        let first = normalize_price("1834.50000000").unwrap();
        let second = normalize_price("1834.50000000").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn short_fraction_is_padded_to_feed_precision() {
        assert_eq!(
            normalize_price("2500.1").unwrap(),
            normalize_price("2500.10000000").unwrap()
        );
    }

    #[test]
    fn whole_number_is_scaled_to_eighteen_decimals() {
        assert_eq!(normalize_price("3").unwrap(), wei("3000000000000000000"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            normalize_price(" 42.5 \n").unwrap(),
            normalize_price("42.5").unwrap()
        );
    }

    #[test]
    fn rejects_non_numerals() {
        for input in ["", "abc", "12,50", "1.2.3", ".5", "5.", "1e3", "+5", "0x10"] {
            assert!(
                matches!(normalize_price(input), Err(DomainError::InvalidPrice { .. })),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn rejects_excess_precision() {
        let err = normalize_price("1.123456789").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPrice { .. }));
    }

    #[test]
    fn rejects_zero_and_negative_quotes() {
        for input in ["0", "0.00000000", "-1.5"] {
            assert!(
                matches!(
                    normalize_price(input),
                    Err(DomainError::NonPositivePrice { .. })
                ),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn rejects_values_beyond_256_bits() {
        let huge = "9".repeat(80);
        assert!(matches!(
            normalize_price(&huge),
            Err(DomainError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn zero_sentinel_is_zero() {
        assert!(NormalizedPrice::ZERO.is_zero());
        assert_eq!(NormalizedPrice::ZERO.to_string(), "0");
    }
}
