//! Pricing Rule Model

use serde::{Deserialize, Serialize};

/// Service a rule belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Parking lot line painting
    Lane,
    /// Epoxy flooring
    Epoxy,
    /// Interior/exterior painting and waterproofing
    Paint,
    /// Applies to every service unless a service-specific rule exists
    Common,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lane => "lane",
            Self::Epoxy => "epoxy",
            Self::Paint => "paint",
            Self::Common => "common",
        }
    }
}

/// Rule category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Per-m² base rate (epoxy area bands, paint interior/exterior)
    AreaBase,
    /// Add-on surcharges, flat fees and floors
    Option,
    /// Flat tier amounts (lane)
    Tier,
    /// Per-material base rate (epoxy)
    MaterialBase,
    /// Material cost entries kept for the admin screen
    Material,
}

/// Named, overridable unit price (가격 규칙)
///
/// Snapshot record from the admin-managed pricing table. Calculators only read
/// these; `(service_type, category, key)` identifies a rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub service_type: ServiceType,
    pub category: RuleCategory,
    pub key: String,
    /// Unit price in won
    pub value: f64,
    /// Unit descriptor, e.g. "m2" or "fixed"
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PricingRule {
    pub fn new(
        service_type: ServiceType,
        category: RuleCategory,
        key: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            id: None,
            service_type,
            category,
            key: key.into(),
            value,
            unit: None,
            description: None,
        }
    }

    /// Whether this rule is addressed by the given triple
    pub fn matches(&self, service_type: ServiceType, category: RuleCategory, key: &str) -> bool {
        self.service_type == service_type && self.category == category && self.key == key
    }
}
