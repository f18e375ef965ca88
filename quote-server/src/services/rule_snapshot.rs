//! Pricing Rule Snapshot - read-only copy of the admin pricing table
//!
//! The admin screens own the pricing table; this service only reads an
//! exported JSON array of [`PricingRule`] records. Handlers take the current
//! snapshot as an `Arc` and price against it, so a reload never changes the
//! rules under a request that is already running.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::PricingRule;

use crate::utils::{AppError, AppResult, ErrorCode};

/// Rules together with the load that produced them
#[derive(Debug, Clone)]
pub struct VersionedRules {
    pub rules: Arc<[PricingRule]>,
    /// Successful loads since startup
    pub version: u64,
}

/// Rule snapshot shared by all handlers
#[derive(Clone)]
pub struct RuleSnapshotService {
    /// File the snapshot is (re)loaded from
    path: Option<PathBuf>,
    snapshot: Arc<RwLock<VersionedRules>>,
}

impl std::fmt::Debug for RuleSnapshotService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("RuleSnapshotService")
            .field("path", &self.path)
            .field("rule_count", &snapshot.rules.len())
            .field("version", &snapshot.version)
            .finish()
    }
}

impl RuleSnapshotService {
    /// Service holding `rules`, with no backing file
    pub fn from_rules(rules: Vec<PricingRule>) -> Self {
        Self {
            path: None,
            snapshot: Arc::new(RwLock::new(VersionedRules {
                rules: rules.into(),
                version: 0,
            })),
        }
    }

    /// Load the snapshot from `path` at startup
    ///
    /// A missing or malformed file is logged and leaves the snapshot empty, so
    /// the calculators price with built-in defaults.
    pub async fn load(path: Option<PathBuf>) -> Self {
        let service = Self {
            path,
            ..Self::from_rules(Vec::new())
        };

        match &service.path {
            Some(path) => match read_rules_file(path).await {
                Ok(rules) => {
                    tracing::info!(
                        path = %path.display(),
                        count = rules.len(),
                        "Pricing rules loaded"
                    );
                    service.replace(rules);
                }
                Err(e) => {
                    tracing::error!(
                        path = %path.display(),
                        code = %e.code,
                        error = %e,
                        "Failed to load pricing rules, using built-in prices"
                    );
                }
            },
            None => {
                tracing::info!("PRICING_RULES_PATH not set, using built-in prices");
            }
        }

        service
    }

    /// Current rules and their version, read under one lock
    pub fn snapshot(&self) -> VersionedRules {
        self.snapshot.read().clone()
    }

    /// Current rules
    pub fn current(&self) -> Arc<[PricingRule]> {
        self.snapshot.read().rules.clone()
    }

    /// Number of successful loads since startup
    pub fn version(&self) -> u64 {
        self.snapshot.read().version
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Re-read the backing file and swap the snapshot
    ///
    /// On failure the previous snapshot stays active.
    pub async fn reload(&self) -> AppResult<VersionedRules> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| AppError::new(ErrorCode::RulesPathNotConfigured))?;

        let rules = read_rules_file(path).await.inspect_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Pricing rule reload failed, keeping previous snapshot"
            );
        })?;

        let snapshot = self.replace(rules);
        tracing::info!(
            path = %path.display(),
            count = snapshot.rules.len(),
            version = snapshot.version,
            "Pricing rules reloaded"
        );
        Ok(snapshot)
    }

    fn replace(&self, rules: Vec<PricingRule>) -> VersionedRules {
        let mut guard = self.snapshot.write();
        let version = guard.version + 1;
        *guard = VersionedRules {
            rules: rules.into(),
            version,
        };
        guard.clone()
    }
}

/// Read a JSON array of pricing rules
pub async fn read_rules_file(path: &Path) -> AppResult<Vec<PricingRule>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::rules_unavailable(format!("Cannot read {}: {e}", path.display()))
            .with_detail("path", path.display().to_string())
    })?;

    serde_json::from_str(&content).map_err(|e| {
        AppError::rules_invalid(format!("Invalid pricing rules in {}: {e}", path.display()))
            .with_detail("path", path.display().to_string())
            .with_detail("line", e.line())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{RuleCategory, ServiceType};

    #[test]
    fn test_from_rules_snapshot() {
        let service = RuleSnapshotService::from_rules(vec![PricingRule::new(
            ServiceType::Lane,
            RuleCategory::Tier,
            "tier_20",
            900_000.0,
        )]);
        assert_eq!(service.current().len(), 1);
        assert_eq!(service.version(), 0);
        assert!(service.path().is_none());
    }

    #[test]
    fn test_snapshot_held_by_caller_survives_replace() {
        let service = RuleSnapshotService::from_rules(vec![PricingRule::new(
            ServiceType::Lane,
            RuleCategory::Tier,
            "tier_20",
            900_000.0,
        )]);
        let held = service.current();
        service.replace(Vec::new());
        assert_eq!(held.len(), 1);
        assert!(service.current().is_empty());
        assert_eq!(service.version(), 1);
    }

    #[test]
    fn test_version_moves_with_rules() {
        let rule = PricingRule::new(ServiceType::Lane, RuleCategory::Tier, "tier_20", 900_000.0);
        let service = RuleSnapshotService::from_rules(Vec::new());

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for n in 1..=200usize {
                    service.replace(vec![rule.clone(); n]);
                }
            });
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1_000 {
                        let snapshot = service.snapshot();
                        assert_eq!(snapshot.rules.len() as u64, snapshot.version);
                    }
                });
            }
        });

        assert_eq!(service.version(), 200);
        assert_eq!(service.current().len(), 200);
    }

    #[tokio::test]
    async fn test_reload_without_path() {
        let service = RuleSnapshotService::from_rules(Vec::new());
        let err = service.reload().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RulesPathNotConfigured);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let err = read_rules_file(Path::new("/nonexistent/pricing_rules.json"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RulesUnavailable);
    }
}
