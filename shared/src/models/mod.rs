//! Data models
//!
//! Shared between quote-server and the web client (via API).
//! Amounts are whole won carried as `f64`; areas are m².

pub mod floor_material;
pub mod paint;
pub mod parking;
pub mod pricing_rule;
pub mod quote;

// Re-exports
pub use floor_material::*;
pub use paint::*;
pub use parking::*;
pub use pricing_rule::*;
pub use quote::*;
