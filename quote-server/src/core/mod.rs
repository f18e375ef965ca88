//! Core - server configuration, state and errors
//!
//! # Modules
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared state (config + pricing rule snapshot)
//! - [`Server`] - HTTP server
//! - [`ServerError`] - server lifecycle errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
