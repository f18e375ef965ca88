//! Money helpers
//!
//! Calculations run on `Decimal`; amounts leave the calculators as `f64`
//! rounded to whole won. Every line item is rounded before it is summed, so a
//! total always equals the sum of the items shown to the customer.
//!
//! Products and sums saturate at `Decimal::MAX` instead of overflowing.

use rust_decimal::prelude::*;

/// Won has no minor unit
const WON_DECIMAL_PLACES: u32 = 0;

/// Convert f64 to Decimal for calculation
///
/// NaN becomes 0; values outside `Decimal`'s range clamp to `MIN`/`MAX`.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        if value.is_nan() {
            Decimal::ZERO
        } else if value > 0.0 {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Round to whole won (half away from zero)
#[inline]
pub fn round_won(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(WON_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for the response
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// `a × b`, saturating at `Decimal::MAX`
#[inline]
pub fn mul_saturating(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::MAX)
}

/// Sum of whole-won items, saturating at `Decimal::MAX`
pub fn sum_won<I>(items: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    items.into_iter().fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(item).unwrap_or(Decimal::MAX)
    })
}

/// `rate × area`, rounded to whole won
#[inline]
pub fn area_amount(rate: Decimal, area: Decimal) -> Decimal {
    round_won(mul_saturating(rate, area))
}

/// Area usable in arithmetic: NaN, infinities and negatives become 0
///
/// Areas beyond `Decimal`'s range clamp to `Decimal::MAX`.
#[inline]
pub fn usable_area(area: f64) -> Decimal {
    if area.is_finite() && area > 0.0 {
        to_decimal(area)
    } else {
        Decimal::ZERO
    }
}
