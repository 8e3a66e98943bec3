//! Artwork catalog TUI library
//!
//! Exposes modules for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
