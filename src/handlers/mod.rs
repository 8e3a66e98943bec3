//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Page fetch responses from the background service
//! - keyboard: User keyboard input
//!
//! Handlers are methods that take &mut App and process events.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
