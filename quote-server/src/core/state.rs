use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use shared::models::PricingRule;

use crate::core::Config;
use crate::services::{HttpService, RuleSnapshotService};

/// Server state - shared references to every service
///
/// Cloned into each handler; all fields are cheap `Arc`-backed handles.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | configuration (immutable) |
/// | rules | RuleSnapshotService | pricing rule snapshot |
/// | http | HttpService | cached router and HTTP listener |
/// | started_at | Instant | process start, for uptime |
///
/// # Example
///
/// ```ignore
/// let rules = state.pricing_rules();
/// let quote = estimate_lane_price(&spots, Some(&rules));
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub rules: RuleSnapshotService,
    pub http: HttpService,
    pub started_at: Instant,
}

impl ServerState {
    /// Assemble state from existing services
    ///
    /// Usually [`initialize()`](Self::initialize) is used instead
    pub fn new(config: Config, rules: RuleSnapshotService) -> Self {
        let http = HttpService::new(config.clone());
        Self {
            config,
            rules,
            http,
            started_at: Instant::now(),
        }
    }

    /// Load the pricing rule snapshot and build the router
    pub async fn initialize(config: &Config) -> Self {
        let rules = RuleSnapshotService::load(config.pricing_rules_path.as_ref().map(PathBuf::from)).await;
        let state = Self::new(config.clone(), rules);
        state.http.initialize(state.clone());
        state
    }

    /// Current pricing rules, pinned for the duration of one request
    pub fn pricing_rules(&self) -> Arc<[PricingRule]> {
        self.rules.current()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
