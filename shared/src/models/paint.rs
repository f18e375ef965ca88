//! Painting / waterproofing quote models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaintType {
    #[default]
    Interior,
    Exterior,
}

impl PaintType {
    /// Rule key of the base rate for this type
    pub fn rule_key(&self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Exterior => "exterior",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaintQuoteInput {
    #[serde(rename = "type", default)]
    pub paint_type: PaintType,
    /// Area in m²
    pub area: f64,
    #[serde(default)]
    pub is_waterproof: bool,
    #[serde(default)]
    pub is_fireproof: bool,
    /// Putty / surface leveling
    #[serde(default)]
    pub is_putty: bool,
}

impl PaintQuoteInput {
    pub fn new(paint_type: PaintType, area: f64) -> Self {
        Self {
            paint_type,
            area,
            is_waterproof: false,
            is_fireproof: false,
            is_putty: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaintPriceBreakdown {
    pub base_price_per_m2: f64,
    pub base_price: f64,
    pub waterproof_price: f64,
    pub fireproof_price: f64,
    pub putty_price: f64,
    pub total: f64,
}
