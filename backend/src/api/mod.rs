//! HTTP API module.
//!
//! This module provides the axum router, its shared state and the server entry point.

pub mod server;
pub mod state;

pub use server::{cors_layer, router, serve, start_server};
pub use state::AppState;
