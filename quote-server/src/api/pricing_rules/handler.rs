//! Pricing Rule API Handlers

use axum::extract::State;
use serde::{Deserialize, Serialize};
use shared::models::PricingRule;

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSnapshot {
    pub version: u64,
    pub count: usize,
    pub rules: Vec<PricingRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResult {
    pub version: u64,
    pub count: usize,
}

/// GET /api/pricing-rules - active snapshot
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<RuleSnapshot>> {
    let snapshot = state.rules.snapshot();
    Ok(ApiResponse::success(RuleSnapshot {
        version: snapshot.version,
        count: snapshot.rules.len(),
        rules: snapshot.rules.to_vec(),
    }))
}

/// POST /api/pricing-rules/reload - re-read the configured file
///
/// A failed reload leaves the active snapshot in place.
pub async fn reload(State(state): State<ServerState>) -> AppResult<ApiResponse<ReloadResult>> {
    let snapshot = state.rules.reload().await?;
    Ok(ApiResponse::success_with_message(
        "Pricing rules reloaded",
        ReloadResult {
            version: snapshot.version,
            count: snapshot.rules.len(),
        },
    ))
}
