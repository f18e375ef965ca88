//! Health check
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | status, version, uptime, rule snapshot |
//!
//! ```json
//! {
//!   "code": 0,
//!   "message": "OK",
//!   "data": {
//!     "status": "ok",
//!     "version": "0.1.0",
//!     "uptime_seconds": 42,
//!     "rule_count": 27,
//!     "rules_version": 1
//!   }
//! }
//! ```

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::api::{ApiResponse, AppResult};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    /// Rules in the active snapshot (0 means built-in prices only)
    rule_count: usize,
    /// Successful snapshot loads since startup
    rules_version: u64,
}

async fn health(State(state): State<ServerState>) -> AppResult<ApiResponse<HealthResponse>> {
    let rules = state.rules.snapshot();
    Ok(ApiResponse::success(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        rule_count: rules.rules.len(),
        rules_version: rules.version,
    }))
}
