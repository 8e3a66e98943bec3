//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Background worker for catalog page fetches

pub mod api;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
