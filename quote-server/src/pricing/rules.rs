//! Pricing rule lookup
//!
//! Admins override default unit prices with [`PricingRule`] records. A lookup
//! never fails: a missing rule, or one whose value is not a finite number in
//! `0..=MAX_RULE_VALUE`, resolves to the caller's default.
//!
//! Resolution order for `(service, category, key)`:
//! 1. first usable rule of the service itself
//! 2. first usable `common` rule
//! 3. the default

use rust_decimal::Decimal;
use shared::models::{PricingRule, RuleCategory, ServiceType};

use super::money::to_decimal;

/// Largest unit price a rule may set (1조원)
pub const MAX_RULE_VALUE: f64 = 1_000_000_000_000.0;

/// Read-only view over a rule snapshot, scoped to one service
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<'a> {
    rules: &'a [PricingRule],
    service: ServiceType,
}

impl<'a> RuleTable<'a> {
    /// `None` behaves like an empty snapshot
    pub fn new(rules: Option<&'a [PricingRule]>, service: ServiceType) -> Self {
        Self {
            rules: rules.unwrap_or_default(),
            service,
        }
    }

    /// Unit price for `(category, key)`, or `default`
    pub fn price(&self, category: RuleCategory, key: &str, default: f64) -> Decimal {
        to_decimal(self.value(category, key).unwrap_or(default))
    }

    /// Like [`price`](Self::price), trying each category in order
    pub fn price_in(&self, categories: &[RuleCategory], key: &str, default: f64) -> Decimal {
        let value = categories
            .iter()
            .find_map(|category| self.value(*category, key))
            .unwrap_or(default);
        to_decimal(value)
    }

    /// Overridden value, if any usable rule matches
    pub fn value(&self, category: RuleCategory, key: &str) -> Option<f64> {
        find_usable(self.rules, self.service, category, key).or_else(|| {
            if self.service == ServiceType::Common {
                None
            } else {
                find_usable(self.rules, ServiceType::Common, category, key)
            }
        })
    }
}

/// Free-function form of [`RuleTable::price`], returning `f64`
pub fn get_price(
    rules: Option<&[PricingRule]>,
    service: ServiceType,
    category: RuleCategory,
    key: &str,
    default: f64,
) -> f64 {
    RuleTable::new(rules, service)
        .value(category, key)
        .unwrap_or(default)
}

fn find_usable(
    rules: &[PricingRule],
    service: ServiceType,
    category: RuleCategory,
    key: &str,
) -> Option<f64> {
    rules
        .iter()
        .filter(|rule| rule.matches(service, category, key))
        .map(|rule| rule.value)
        .find(|value| is_usable(*value))
}

#[inline]
fn is_usable(value: f64) -> bool {
    value.is_finite() && (0.0..=MAX_RULE_VALUE).contains(&value)
}
