//! Shared types for the quote estimation service
//!
//! Domain models (pricing rules, option catalogs, price breakdowns), the
//! unified error system and ko-KR display formatting, used by quote-server
//! and mirrored by the web client.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
