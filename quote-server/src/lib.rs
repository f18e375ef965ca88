//! Quote Server - construction quote estimation service
//!
//! # Overview
//!
//! Prices the three services sold on the site (parking-lot line painting,
//! epoxy flooring, painting/waterproofing) from customer inputs and an
//! admin-maintained pricing rule snapshot.
//!
//! - **Geometry** (`geometry`): lot area from map clicks
//! - **Pricing** (`pricing`): spot estimator and per-service calculators
//! - **HTTP API** (`api`): JSON endpoints for the quote pages
//!
//! # Layout
//!
//! ```text
//! quote-server/src/
//! ├── core/          # config, state, server
//! ├── services/      # rule snapshot, HTTP service
//! ├── api/           # routes and handlers
//! ├── geometry/      # polygon area
//! ├── pricing/       # calculators
//! └── utils/         # logger, validation
//! ```

pub mod api;
pub mod core;
pub mod geometry;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use services::RuleSnapshotService;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
///
/// Call once at startup; logging settings come from the returned [`Config`].
pub fn setup_environment() -> Config {
    // A missing .env is normal outside development
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
   ____              __
  / __ \__  ______  / /____
 / / / / / / / __ \/ __/ _ \
/ /_/ / /_/ / /_/ / /_/  __/
\___\_\__,_/\____/\__/\___/
    "#
    );
}
