//! Epoxy flooring price calculator
//!
//! ## Pricing flow
//!
//! ```text
//! base rate (material, or area band for unlisted materials)
//!     │
//!     ▼
//! base + quality + crack + anti-slip + protection + self-leveling  (rate × area)
//!     │
//!     ▼
//! + color mixing (flat)  =  subtotal
//!     │
//!     ▼
//! minimum service fee floor  =  total
//! ```

use rust_decimal::Decimal;
use shared::models::{
    CrackCondition, EpoxyPriceBreakdown, EpoxyQuoteInput, FloorMaterial, FloorQuality,
    MaterialId, PricingRule, RuleCategory, ServiceType, ANTI_SLIP, COLOR_MIXING_FEE,
    MIN_SERVICE_FEE, SELF_LEVELING, SURFACE_PROTECTION,
};

use super::money::{area_amount, round_won, sum_won, to_f64, usable_area};
use super::rules::RuleTable;

/// Legacy per-m² band by job size, used for materials outside the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaBand {
    Under100,
    From101To299,
    From300To499,
    Over500,
}

impl AreaBand {
    pub fn for_area(area: f64) -> Self {
        if area >= 500.0 {
            Self::Over500
        } else if area >= 300.0 {
            Self::From300To499
        } else if area >= 101.0 {
            Self::From101To299
        } else {
            Self::Under100
        }
    }

    pub fn rule_key(&self) -> &'static str {
        match self {
            Self::Under100 => "area_under_100",
            Self::From101To299 => "area_101_299",
            Self::From300To499 => "area_300_499",
            Self::Over500 => "area_over_500",
        }
    }

    pub fn default_price(&self) -> f64 {
        match self {
            Self::Under100 => 65_000.0,
            Self::From101To299 => 45_000.0,
            Self::From300To499 => 40_000.0,
            Self::Over500 => 35_000.0,
        }
    }
}

/// Per-m² base rate for `material` on a job of `area` m²
///
/// Catalog materials use their own rate; anything else falls back to the
/// area band.
pub fn resolve_base_price(
    material: MaterialId,
    area: f64,
    rules: Option<&[PricingRule]>,
) -> f64 {
    to_f64(base_rate(&RuleTable::new(rules, ServiceType::Epoxy), material, area))
}

fn base_rate(table: &RuleTable<'_>, material: MaterialId, area: f64) -> Decimal {
    let catalog_rate = material
        .rule_key()
        .zip(FloorMaterial::find(material))
        .map(|(key, entry)| table.price(RuleCategory::MaterialBase, key, entry.price_per_m2));

    catalog_rate.unwrap_or_else(|| {
        let band = AreaBand::for_area(area);
        table.price(RuleCategory::AreaBase, band.rule_key(), band.default_price())
    })
}

/// Itemized epoxy quote
pub fn estimate_epoxy_price(
    input: &EpoxyQuoteInput,
    rules: Option<&[PricingRule]>,
) -> EpoxyPriceBreakdown {
    let table = RuleTable::new(rules, ServiceType::Epoxy);
    let area = usable_area(input.area);

    let base_rate = base_rate(&table, input.material_id, input.area);
    let base_price = area_amount(base_rate, area);

    let floor_quality_price = match input.effective_quality() {
        Some(FloorQuality::Poor) => {
            let rate = table.price(
                RuleCategory::Option,
                "quality_poor",
                FloorQuality::Poor.info().price_per_m2,
            );
            area_amount(rate, area)
        }
        _ => Decimal::ZERO,
    };

    let crack_repair_price = match input.crack_condition {
        Some(CrackCondition::Severe) => {
            let rate = table.price(
                RuleCategory::Option,
                "crack_severe",
                CrackCondition::Severe.info().price_per_m2,
            );
            area_amount(rate, area)
        }
        _ => Decimal::ZERO,
    };

    let anti_slip_price = if input.include_anti_slip {
        area_amount(
            table.price(RuleCategory::Option, ANTI_SLIP.id, ANTI_SLIP.price_per_m2),
            area,
        )
    } else {
        Decimal::ZERO
    };

    let surface_protection_price = if input.include_surface_protection {
        area_amount(
            table.price(
                RuleCategory::Option,
                SURFACE_PROTECTION.id,
                SURFACE_PROTECTION.price_per_m2,
            ),
            area,
        )
    } else {
        Decimal::ZERO
    };

    let self_leveling_rate = if input.include_self_leveling {
        table.price(RuleCategory::Option, SELF_LEVELING.id, SELF_LEVELING.price_per_m2)
    } else {
        Decimal::ZERO
    };
    let self_leveling_price = area_amount(self_leveling_rate, area);

    let color_mixing_fee = if input.needs_color_mixing_fee {
        round_won(table.price(RuleCategory::Option, "color_mixing", COLOR_MIXING_FEE))
    } else {
        Decimal::ZERO
    };

    let subtotal = sum_won([
        base_price,
        floor_quality_price,
        crack_repair_price,
        anti_slip_price,
        surface_protection_price,
        self_leveling_price,
        color_mixing_fee,
    ]);

    let min_fee = round_won(table.price(RuleCategory::Option, "min_fee", MIN_SERVICE_FEE));
    let is_min_fee_applied = subtotal > Decimal::ZERO && subtotal < min_fee;
    let total = if is_min_fee_applied {
        tracing::debug!(%subtotal, %min_fee, "Epoxy subtotal raised to minimum service fee");
        min_fee
    } else {
        subtotal
    };

    EpoxyPriceBreakdown {
        base_price_per_m2: to_f64(base_rate),
        base_price: to_f64(base_price),
        floor_quality_price: to_f64(floor_quality_price),
        crack_repair_price: to_f64(crack_repair_price),
        anti_slip_price: to_f64(anti_slip_price),
        surface_protection_price: to_f64(surface_protection_price),
        self_leveling_price_per_m2: to_f64(self_leveling_rate),
        self_leveling_price: to_f64(self_leveling_price),
        color_mixing_fee: to_f64(color_mixing_fee),
        subtotal: to_f64(subtotal),
        is_min_fee_applied,
        total: to_f64(total),
    }
}
