//! SolarWinds Information Service (SWIS) Core Library
//!
//! This crate provides the transport-independent pieces of the SWIS client:
//! - Connection configuration
//! - Endpoint path construction
//! - Request and response wire models

pub mod config;
pub mod endpoints;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use models::*;
