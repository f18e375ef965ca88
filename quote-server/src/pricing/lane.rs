//! Lane (line painting) price calculator
//!
//! Regular spots select a flat tier; accessibility and EV spots add a per-spot
//! surcharge. Lots above the last tier are not priced automatically.

use rust_decimal::Decimal;
use shared::models::{LanePriceBreakdown, LaneSpots, PricingRule, RuleCategory, ServiceType};
use shared::util::format_man;

use super::money::{mul_saturating, round_won, sum_won, to_f64};
use super::rules::RuleTable;

/// Largest regular spot count priced without a site visit
pub const MAX_TIERED_REGULAR_SPOTS: u32 = 200;

/// Shown instead of a price above [`MAX_TIERED_REGULAR_SPOTS`]
pub const CONSULTATION_LABEL: &str = "별도 상담 필요";

pub const DEFAULT_SPECIAL_SPOT_PRICE: f64 = 250_000.0;

/// Flat price bracket selected by the regular spot count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneTier {
    /// Up to 20 spots
    Small,
    /// 21 to 100 spots
    Medium,
    /// 101 to 200 spots
    Large,
}

impl LaneTier {
    /// Tier for `regular_spots`, `None` above the last tier
    pub fn for_spots(regular_spots: u32) -> Option<Self> {
        match regular_spots {
            0..=20 => Some(Self::Small),
            21..=100 => Some(Self::Medium),
            101..=MAX_TIERED_REGULAR_SPOTS => Some(Self::Large),
            _ => None,
        }
    }

    pub fn rule_key(&self) -> &'static str {
        match self {
            Self::Small => "tier_20",
            Self::Medium => "tier_100",
            Self::Large => "tier_200",
        }
    }

    pub fn default_price(&self) -> f64 {
        match self {
            Self::Small => 800_000.0,
            Self::Medium => 1_250_000.0,
            Self::Large => 2_400_000.0,
        }
    }
}

/// Price a lane painting job
///
/// A job with no spots at all is quoted as zero rather than the smallest tier.
pub fn estimate_lane_price(spots: &LaneSpots, rules: Option<&[PricingRule]>) -> LanePriceBreakdown {
    let Some(tier) = LaneTier::for_spots(spots.regular_spots) else {
        tracing::debug!(
            regular_spots = spots.regular_spots,
            "Lane job exceeds tiered pricing, consultation required"
        );
        return LanePriceBreakdown {
            base_price: 0.0,
            special_price: 0.0,
            total: 0.0,
            needs_consultation: true,
            formatted: CONSULTATION_LABEL.to_string(),
        };
    };

    if spots.regular_spots == 0 && spots.special_spots() == 0 {
        return LanePriceBreakdown {
            base_price: 0.0,
            special_price: 0.0,
            total: 0.0,
            needs_consultation: false,
            formatted: format_man(0.0),
        };
    }

    let table = RuleTable::new(rules, ServiceType::Lane);

    let base = round_won(table.price(RuleCategory::Tier, tier.rule_key(), tier.default_price()));
    let special_rate = table.price(
        RuleCategory::Option,
        "special_spot",
        DEFAULT_SPECIAL_SPOT_PRICE,
    );
    let special = round_won(mul_saturating(
        special_rate,
        Decimal::from(spots.special_spots()),
    ));
    let total = sum_won([base, special]);

    LanePriceBreakdown {
        base_price: to_f64(base),
        special_price: to_f64(special),
        total: to_f64(total),
        needs_consultation: false,
        formatted: format_man(to_f64(total)),
    }
}
