//! Catalog API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/catalog/epoxy | GET | materials, finishes, colors and options with current prices |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::EpoxyCatalog;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/catalog/epoxy", get(handler::epoxy))
}
