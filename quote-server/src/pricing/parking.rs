//! Parking spot estimator
//!
//! Derives spot counts from a lot area. Accessibility and EV spots follow the
//! usual regulation ratios and only kick in above a minimum lot size.

use shared::models::{LocationType, ParkingSpotEstimate};

/// Area per spot including aisles, surface lot (m²)
pub const GROUND_AREA_PER_SPOT: f64 = 28.0;
/// Area per spot including aisles and columns, underground (m²)
pub const UNDERGROUND_AREA_PER_SPOT: f64 = 33.0;

/// Accessibility spots: 3% of the total, from 10 spots up
const DISABLED_PERCENT: u64 = 3;
const DISABLED_MIN_TOTAL: u32 = 10;
/// EV charging spots: 5% of the total, from 20 spots up
const EV_PERCENT: u64 = 5;
const EV_MIN_TOTAL: u32 = 20;

/// Area one spot takes at the given site type
pub fn area_per_spot(location: LocationType) -> f64 {
    match location {
        LocationType::Ground => GROUND_AREA_PER_SPOT,
        LocationType::Underground => UNDERGROUND_AREA_PER_SPOT,
    }
}

/// Estimate spot counts for a lot of `area_sqm`
///
/// Zero, negative or non-finite areas yield an empty estimate.
pub fn estimate_spots(area_sqm: f64, location: LocationType) -> ParkingSpotEstimate {
    if !area_sqm.is_finite() || area_sqm <= 0.0 {
        return ParkingSpotEstimate::default();
    }

    // `as` saturates, absurd areas cap at u32::MAX
    let total = (area_sqm / area_per_spot(location)).floor() as u32;

    let disabled = if total >= DISABLED_MIN_TOTAL {
        ceil_percent(total, DISABLED_PERCENT).max(1)
    } else {
        0
    };
    let ev = if total >= EV_MIN_TOTAL {
        ceil_percent(total, EV_PERCENT).max(1)
    } else {
        0
    };
    let regular = total.saturating_sub(disabled).saturating_sub(ev);

    ParkingSpotEstimate {
        total_spots: total,
        regular_spots: regular,
        disabled_spots: disabled,
        ev_spots: ev,
    }
}

/// `ceil(total × percent / 100)` in integers
fn ceil_percent(total: u32, percent: u64) -> u32 {
    let scaled = (u64::from(total) * percent).div_ceil(100);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
