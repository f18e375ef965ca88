//! Quote totals and quick-quote models
//!
//! [`QuoteCosts`] is what the quote submission flow stores next to the contact
//! details; the estimation service only produces it.

use serde::{Deserialize, Serialize};

use super::floor_material::{EpoxyPriceBreakdown, MaterialId};
use super::paint::{PaintPriceBreakdown, PaintType};
use super::parking::LanePriceBreakdown;

/// Numeric totals of a computed quote
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct QuoteCosts {
    /// Base work (tier amount or base rate × area)
    pub base_cost: f64,
    /// Everything the customer opted into on top of the base
    pub option_cost: f64,
    /// Top-up added to reach the minimum service fee
    pub surcharge: f64,
    pub total_cost: f64,
    pub is_minimum_applied: bool,
    pub needs_consultation: bool,
}

impl From<&LanePriceBreakdown> for QuoteCosts {
    fn from(b: &LanePriceBreakdown) -> Self {
        Self {
            base_cost: b.base_price,
            option_cost: b.special_price,
            surcharge: 0.0,
            total_cost: b.total,
            is_minimum_applied: false,
            needs_consultation: b.needs_consultation,
        }
    }
}

impl From<&EpoxyPriceBreakdown> for QuoteCosts {
    fn from(b: &EpoxyPriceBreakdown) -> Self {
        Self {
            base_cost: b.base_price,
            option_cost: b.subtotal - b.base_price,
            surcharge: b.total - b.subtotal,
            total_cost: b.total,
            is_minimum_applied: b.is_min_fee_applied,
            needs_consultation: false,
        }
    }
}

impl From<&PaintPriceBreakdown> for QuoteCosts {
    fn from(b: &PaintPriceBreakdown) -> Self {
        Self {
            base_cost: b.base_price,
            option_cost: b.waterproof_price + b.fireproof_price + b.putty_price,
            surcharge: 0.0,
            total_cost: b.total,
            is_minimum_applied: false,
            needs_consultation: false,
        }
    }
}

/// One-field estimate from the landing page calculator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "service", rename_all = "snake_case")]
pub enum QuickQuoteRequest {
    Epoxy { material_id: MaterialId, area: f64 },
    Lane { area: f64 },
    Paint {
        #[serde(rename = "type", default)]
        paint_type: PaintType,
        area: f64,
    },
}

impl QuickQuoteRequest {
    pub fn area(&self) -> f64 {
        match self {
            Self::Epoxy { area, .. } | Self::Lane { area } | Self::Paint { area, .. } => *area,
        }
    }
}

/// Price band shown instead of a single number
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickQuoteResult {
    /// Point estimate the range was derived from
    pub total: f64,
    pub range: PriceRange,
    pub needs_consultation: bool,
    /// Display string, e.g. "1,080,000원 ~ 1,320,000원"
    pub formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoxy_costs_split_floor_top_up() {
        let breakdown = EpoxyPriceBreakdown {
            base_price_per_m2: 45_000.0,
            base_price: 180_000.0,
            floor_quality_price: 0.0,
            crack_repair_price: 0.0,
            anti_slip_price: 30_000.0,
            surface_protection_price: 0.0,
            self_leveling_price_per_m2: 0.0,
            self_leveling_price: 0.0,
            color_mixing_fee: 50_000.0,
            subtotal: 260_000.0,
            is_min_fee_applied: true,
            total: 300_000.0,
        };
        let costs = QuoteCosts::from(&breakdown);
        assert_eq!(costs.base_cost, 180_000.0);
        assert_eq!(costs.option_cost, 80_000.0);
        assert_eq!(costs.surcharge, 40_000.0);
        assert_eq!(costs.total_cost, 300_000.0);
        assert!(costs.is_minimum_applied);
    }

    #[test]
    fn test_lane_costs_carry_consultation_flag() {
        let breakdown = LanePriceBreakdown {
            base_price: 0.0,
            special_price: 0.0,
            total: 0.0,
            needs_consultation: true,
            formatted: "별도 상담 필요".to_string(),
        };
        let costs = QuoteCosts::from(&breakdown);
        assert!(costs.needs_consultation);
        assert_eq!(costs.total_cost, 0.0);
    }

    #[test]
    fn test_quick_quote_request_tagging() {
        let json = r#"{"service":"paint","type":"exterior","area":40}"#;
        let request: QuickQuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            QuickQuoteRequest::Paint {
                paint_type: PaintType::Exterior,
                area: 40.0
            }
        );
        assert_eq!(request.area(), 40.0);

        let json = r#"{"service":"epoxy","material_id":"solid_epoxy","area":100}"#;
        let request: QuickQuoteRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            request,
            QuickQuoteRequest::Epoxy {
                material_id: MaterialId::SolidEpoxy,
                ..
            }
        ));
    }
}
