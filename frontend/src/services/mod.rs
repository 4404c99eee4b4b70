//! Backend services.
//!
//! # Services
//!
//! - [`api`] - dashboard, feed, chart and scan result reads
//! - [`upload`] - document upload with progress events

pub mod api;
pub mod upload;

pub use api::*;
pub use upload::*;
