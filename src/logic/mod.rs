//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Fetch error classification and display
//! - formatting: Table cell text (placeholders, truncation)
//! - pagination: Page bounds and labels
//! - selection: Cross-page selection reconciliation
//! - ui: Toast timing

pub mod errors;
pub mod formatting;
pub mod pagination;
pub mod selection;
pub mod ui;
