//! Utilities
//!
//! # Contents
//!
//! - [`AppError`] / [`ApiResponse`] - unified error types (from shared::error)
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - request bounds checks

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
