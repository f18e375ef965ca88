//! Paint price calculator
//!
//! Base rate by paint type plus per-m² add-ons. No tiers and no floor.

use rust_decimal::Decimal;
use shared::models::{PaintPriceBreakdown, PaintQuoteInput, PaintType, PricingRule, RuleCategory, ServiceType};

use super::money::{area_amount, sum_won, to_f64, usable_area};
use super::rules::RuleTable;

/// Paint keys live in either category depending on how the admin filed them
const PAINT_CATEGORIES: [RuleCategory; 2] = [RuleCategory::AreaBase, RuleCategory::Option];

pub const DEFAULT_WATERPROOF_PRICE: f64 = 10_000.0;
pub const DEFAULT_FIREPROOF_PRICE: f64 = 15_000.0;
pub const DEFAULT_PUTTY_PRICE: f64 = 5_000.0;

/// Default per-m² rate of a paint type
pub fn default_base_price(paint_type: PaintType) -> f64 {
    match paint_type {
        PaintType::Interior => 25_000.0,
        PaintType::Exterior => 35_000.0,
    }
}

pub fn estimate_paint_price(
    input: &PaintQuoteInput,
    rules: Option<&[PricingRule]>,
) -> PaintPriceBreakdown {
    let table = RuleTable::new(rules, ServiceType::Paint);
    let area = usable_area(input.area);

    let base_rate = table.price_in(
        &PAINT_CATEGORIES,
        input.paint_type.rule_key(),
        default_base_price(input.paint_type),
    );
    let base_price = area_amount(base_rate, area);

    let add_on = |enabled: bool, key: &str, default: f64| {
        if enabled {
            area_amount(table.price_in(&PAINT_CATEGORIES, key, default), area)
        } else {
            Decimal::ZERO
        }
    };
    let waterproof_price = add_on(input.is_waterproof, "waterproof", DEFAULT_WATERPROOF_PRICE);
    let fireproof_price = add_on(input.is_fireproof, "fireproof", DEFAULT_FIREPROOF_PRICE);
    let putty_price = add_on(input.is_putty, "putty", DEFAULT_PUTTY_PRICE);

    let total = sum_won([base_price, waterproof_price, fireproof_price, putty_price]);

    PaintPriceBreakdown {
        base_price_per_m2: to_f64(base_rate),
        base_price: to_f64(base_price),
        waterproof_price: to_f64(waterproof_price),
        fireproof_price: to_f64(fireproof_price),
        putty_price: to_f64(putty_price),
        total: to_f64(total),
    }
}
