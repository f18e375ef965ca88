//! Quick quote ranges
//!
//! One-field estimate for the landing page: the full calculator runs with
//! default options and the point estimate is widened into a band rounded
//! outward to 10,000 won.

use rust_decimal::Decimal;
use shared::models::{
    CrackCondition, EpoxyQuoteInput, FloorQuality, LocationType, PaintQuoteInput, PriceRange,
    PricingRule, QuickQuoteRequest, QuickQuoteResult,
};
use shared::util::format_won;

use super::epoxy::estimate_epoxy_price;
use super::lane::{CONSULTATION_LABEL, estimate_lane_price};
use super::money::{mul_saturating, to_decimal, to_f64};
use super::paint::estimate_paint_price;
use super::parking::estimate_spots;

/// Range bounds are multiples of this (만원)
const RANGE_STEP: i64 = 10_000;

/// Lower bound factor
const MIN_FACTOR: Decimal = Decimal::from_parts(9, 0, 0, false, 1);
/// Upper bound factor for epoxy and paint
const MAX_FACTOR: Decimal = Decimal::from_parts(11, 0, 0, false, 1);
/// Lane jobs vary more with site layout
const LANE_MAX_FACTOR: Decimal = Decimal::from_parts(115, 0, 0, false, 2);

/// Estimate a price band from area alone
pub fn quick_quote(request: &QuickQuoteRequest, rules: Option<&[PricingRule]>) -> QuickQuoteResult {
    let area = request.area();
    if !area.is_finite() || area <= 0.0 {
        return QuickQuoteResult {
            total: 0.0,
            range: PriceRange::default(),
            needs_consultation: false,
            formatted: format_won(0.0),
        };
    }

    let (total, max_factor) = match request {
        QuickQuoteRequest::Epoxy { material_id, area } => {
            let mut input = EpoxyQuoteInput::new(*material_id, *area);
            input.floor_quality = Some(FloorQuality::Normal);
            input.crack_condition = Some(CrackCondition::Moderate);
            (estimate_epoxy_price(&input, rules).total, MAX_FACTOR)
        }
        QuickQuoteRequest::Lane { area } => {
            let spots = estimate_spots(*area, LocationType::Ground).lane_spots();
            let lane = estimate_lane_price(&spots, rules);
            if lane.needs_consultation {
                return QuickQuoteResult {
                    total: 0.0,
                    range: PriceRange::default(),
                    needs_consultation: true,
                    formatted: CONSULTATION_LABEL.to_string(),
                };
            }
            (lane.total, LANE_MAX_FACTOR)
        }
        QuickQuoteRequest::Paint { paint_type, area } => {
            let input = PaintQuoteInput::new(*paint_type, *area);
            (estimate_paint_price(&input, rules).total, MAX_FACTOR)
        }
    };

    let range = price_range(total, max_factor);
    let formatted = if range.max == 0.0 {
        format_won(0.0)
    } else {
        format!("{} ~ {}", format_won(range.min), format_won(range.max))
    };

    QuickQuoteResult {
        total,
        range,
        needs_consultation: false,
        formatted,
    }
}

/// `[floor(total × 0.9), ceil(total × max_factor)]` in steps of 10,000
pub fn price_range(total: f64, max_factor: Decimal) -> PriceRange {
    let total = to_decimal(total);
    let step = Decimal::from(RANGE_STEP);
    let min = (mul_saturating(total, MIN_FACTOR) / step).floor() * step;
    let max = mul_saturating((mul_saturating(total, max_factor) / step).ceil(), step);
    PriceRange {
        min: to_f64(min),
        max: to_f64(max),
    }
}
