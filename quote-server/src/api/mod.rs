//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness and snapshot status
//! - [`estimate`] - area, spot and price calculators
//! - [`catalog`] - option catalogs with current prices
//! - [`pricing_rules`] - read and reload the rule snapshot

pub mod catalog;
pub mod estimate;
pub mod health;
pub mod pricing_rules;

pub use crate::utils::{ApiResponse, AppResult};
