//! Pricing Rule API
//!
//! Read-only view of the active snapshot. Editing happens in the admin
//! screens; this service only re-reads the exported file.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub use handler::{ReloadResult, RuleSnapshot};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pricing-rules", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/reload", post(handler::reload))
}
