//! Estimate API
//!
//! | Path | Method | Body |
//! |------|--------|------|
//! | /api/estimate/area | POST | map outline → area and spot counts |
//! | /api/estimate/spots | POST | area → spot counts |
//! | /api/estimate/lane | POST | spot counts → lane quote |
//! | /api/estimate/epoxy | POST | epoxy options → itemized quote |
//! | /api/estimate/paint | POST | paint options → itemized quote |
//! | /api/estimate/quick | POST | service + area → price band |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::{AreaEstimate, AreaRequest, EpoxyEstimateRequest, Estimate, SpotsRequest};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/estimate", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/area", post(handler::area))
        .route("/spots", post(handler::spots))
        .route("/lane", post(handler::lane))
        .route("/epoxy", post(handler::epoxy))
        .route("/paint", post(handler::paint))
        .route("/quick", post(handler::quick))
}
