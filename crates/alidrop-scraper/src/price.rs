//! Price resolution over the raw SKU price strings.
//!
//! The record keeps `DiscountPrice` and `OriginalPrice` exactly as the source
//! sent them. A single numeric price is only computed when an export needs
//! one, using a fixed precedence: the discount price wins over the original,
//! and a `"low - high"` range is always averaged, never reduced to an
//! endpoint.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)\s*$").expect("valid range regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("neither DiscountPrice nor OriginalPrice holds a usable price")]
    NoPrice,

    #[error("\"{value}\" is neither a decimal nor a \"min - max\" range")]
    Malformed { value: String },
}

/// One raw price field after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceField {
    Empty,
    Plain(Decimal),
    Range(Decimal, Decimal),
}

impl PriceField {
    fn parse(raw: &str) -> Result<Self, PriceError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::Empty);
        }
        if let Some(caps) = RANGE_RE.captures(raw) {
            let low = decimal(&caps[1])?;
            let high = decimal(&caps[2])?;
            return Ok(Self::Range(low, high));
        }
        decimal(raw).map(Self::Plain)
    }

    fn value(self) -> Option<Decimal> {
        match self {
            Self::Empty => None,
            Self::Plain(v) => Some(v),
            Self::Range(low, high) => Some(
                ((low + high) / Decimal::TWO)
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
            ),
        }
    }
}

fn decimal(raw: &str) -> Result<Decimal, PriceError> {
    Decimal::from_str(raw).map_err(|_| PriceError::Malformed {
        value: raw.to_owned(),
    })
}

/// Maps the default SKU's `(price, promotionPrice)` to the record's
/// `(DiscountPrice, OriginalPrice)`.
///
/// Absent values become empty strings; present values are kept verbatim.
#[must_use]
pub fn canonical_pair(price: Option<&str>, promotion: Option<&str>) -> (String, String) {
    (
        promotion.unwrap_or_default().to_owned(),
        price.unwrap_or_default().to_owned(),
    )
}

/// The single export price for a `(DiscountPrice, OriginalPrice)` pair.
///
/// First match wins: a discount range (averaged, rounded to cents), a plain
/// discount, an original range (averaged), a plain original.
///
/// # Errors
///
/// - [`PriceError::NoPrice`] when both fields are empty.
/// - [`PriceError::Malformed`] when the field that would be used is neither a
///   decimal nor a range.
pub fn representative_price(discount: &str, original: &str) -> Result<Decimal, PriceError> {
    if let Some(v) = PriceField::parse(discount)?.value() {
        return Ok(v);
    }
    PriceField::parse(original)?
        .value()
        .ok_or(PriceError::NoPrice)
}

/// The "compare at" price shown struck through next to the sale price.
///
/// Only meaningful when a discount exists: returns the representative of
/// `original` when both fields are non-empty, otherwise `None`.
///
/// # Errors
///
/// Returns [`PriceError::Malformed`] when `original` cannot be parsed.
pub fn compare_at_price(discount: &str, original: &str) -> Result<Option<Decimal>, PriceError> {
    if discount.trim().is_empty() {
        return Ok(None);
    }
    Ok(PriceField::parse(original)?.value())
}
