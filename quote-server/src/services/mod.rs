//! Services
//!
//! - [`RuleSnapshotService`] - pricing rule snapshot with file reload
//! - [`HttpService`] - router assembly and HTTP server

pub mod http_server;
pub mod rule_snapshot;

pub use http_server::{HttpService, build_app, build_router};
pub use rule_snapshot::{RuleSnapshotService, VersionedRules, read_rules_file};
