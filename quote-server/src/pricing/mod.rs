//! Quote Pricing Module
//!
//! Pure calculators for the three services. Each takes an optional pricing
//! rule snapshot and falls back to built-in unit prices for anything the
//! snapshot does not override.

mod epoxy;
mod lane;
mod money;
mod paint;
mod parking;
mod quick;
pub mod rules;

pub use epoxy::*;
pub use lane::*;
pub use paint::*;
pub use parking::*;
pub use quick::*;
pub use rules::{RuleTable, get_price};
