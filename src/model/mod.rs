//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **CatalogModel**: The page of artworks on screen
//! - **SelectionSet**: Selected artwork ids across all pages
//! - **RequestTracker**: Generation tagging for page fetches
//! - **UiModel**: Preferences, dialogs, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the binary's runtime
//! - Selection changes go through `logic::selection`

pub mod catalog;
pub mod requests;
pub mod selection;
pub mod types;
pub mod ui;

use log::debug;

pub use catalog::CatalogModel;
pub use requests::{RequestTicket, RequestTracker};
pub use selection::SelectionSet;
pub use types::*;
pub use ui::UiModel;

use crate::api::{Artwork, ArtworkId, ArtworksPage};
use crate::logic;
use crate::logic::selection::SelectionError;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Page currently displayed
    pub catalog: CatalogModel,

    /// Selected ids across every page
    pub selection: SelectionSet,

    /// In-flight fetch tracking
    pub requests: RequestTracker,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            catalog: CatalogModel::new(1),
            selection: SelectionSet::new(),
            requests: RequestTracker::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    /// Page the user is heading to: the one being fetched, else the one shown
    pub fn target_page(&self) -> u32 {
        self.requests.pending_page().unwrap_or(self.catalog.page)
    }

    /// Issue a fetch for `page`, clamped to the known page range
    pub fn begin_page_load(&mut self, page: u32) -> RequestTicket {
        let page = logic::pagination::clamp_page(page, self.catalog.total_pages);
        let ticket = self.requests.issue(page);
        debug!(
            "Issued fetch generation={} page={}",
            ticket.generation, ticket.page
        );
        ticket
    }

    /// Apply a fetch result if it answers the latest request
    pub fn apply_page_response(
        &mut self,
        generation: u64,
        page: u32,
        result: anyhow::Result<ArtworksPage>,
    ) -> PageOutcome {
        let Some(pending) = self.requests.complete(generation) else {
            debug!(
                "Dropping stale response generation={} page={} (latest={})",
                generation,
                page,
                self.requests.latest_generation()
            );
            return PageOutcome::Stale { generation, page };
        };

        self.catalog.last_load_time_ms = Some(pending.started_at.elapsed().as_millis() as u64);

        match result {
            Ok(fetched) => {
                let total_pages = fetched.total_pages();
                let rows = fetched.data.len();
                self.catalog.replace_page(page, fetched.data, total_pages);
                PageOutcome::Applied { page, rows }
            }
            Err(error) => {
                self.catalog.clear_page(page);
                let error_type = logic::errors::classify_error(&error);
                PageOutcome::Failed {
                    page,
                    summary: logic::errors::error_summary(&error_type).to_string(),
                    message: logic::errors::format_error_message(&error),
                }
            }
        }
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selection.contains(id)
    }

    /// Loaded rows that are selected
    pub fn visible_selection(&self) -> Vec<&Artwork> {
        logic::selection::visible_selection(&self.catalog.items, &self.selection)
    }

    pub fn move_cursor_down(&mut self) {
        self.catalog.cursor_down();
    }

    pub fn move_cursor_up(&mut self) {
        self.catalog.cursor_up();
    }

    /// Flip the checkbox under the cursor; returns the row's new state
    pub fn toggle_cursor_row(&mut self) -> Option<bool> {
        let idx = self.catalog.cursor?;
        let updated = logic::selection::toggle_row(&self.selection, &self.catalog.items, idx)?;
        self.selection = updated;
        self.catalog
            .cursor_item()
            .map(|item| self.selection.contains(item.id))
    }

    /// Header checkbox for the visible page
    pub fn toggle_current_page(&mut self) {
        self.selection = logic::selection::toggle_page(&self.selection, &self.catalog.items);
    }

    /// Bulk-select the first N visible rows from the dialog input
    ///
    /// On error the selection is left as it was.
    pub fn select_first_n(&mut self, input: &str) -> Result<usize, SelectionError> {
        let n = logic::selection::parse_count(input)?;
        let updated = logic::selection::select_first_n(
            &self.selection,
            n,
            &self.catalog.items,
            self.is_loading(),
        )?;
        self.selection = updated;
        Ok(n as usize)
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    /// Show toast message
    pub fn show_toast(&mut self, severity: ToastSeverity, summary: impl Into<String>, detail: impl Into<String>) {
        self.ui.show_toast(severity, summary, detail);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
