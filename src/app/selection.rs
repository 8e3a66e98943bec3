//! Row selection actions
//!
//! Thin wrappers over the model's selection transitions that add the user
//! feedback (toasts, dialog state).

use log::debug;

use artview::logic::selection::SelectionError;
use artview::logic::ui::VALIDATION_TOAST_LIFE_MS;
use artview::model::{BulkSelectState, ToastSeverity};

use crate::App;

impl App {
    pub(crate) fn toggle_cursor_row(&mut self) {
        if let Some(checked) = self.model.toggle_cursor_row() {
            debug!(
                "Row toggled checked={} total_selected={}",
                checked,
                self.model.selection.len()
            );
        }
    }

    pub(crate) fn toggle_current_page(&mut self) {
        self.model.toggle_current_page();
        debug!("Page toggled total_selected={}", self.model.selection.len());
    }

    /// Open the "select first N rows" dialog
    pub(crate) fn open_bulk_select(&mut self) {
        if self.model.is_loading() {
            self.warn_still_loading();
            return;
        }
        self.model.ui.bulk_select = Some(BulkSelectState::default());
    }

    pub(crate) fn close_bulk_select(&mut self) {
        self.model.ui.bulk_select = None;
    }

    /// Apply the dialog input; the dialog stays open on validation errors
    pub(crate) fn confirm_bulk_select(&mut self) {
        let Some(state) = self.model.ui.bulk_select.as_ref() else {
            return;
        };
        let input = state.input.clone();

        match self.model.select_first_n(&input) {
            Ok(n) => {
                self.model.show_toast(
                    ToastSeverity::Success,
                    "Selected",
                    format!("Selected first {} rows on this page", n),
                );
                self.close_bulk_select();
            }
            Err(SelectionError::StillLoading) => self.warn_still_loading(),
            Err(err) => {
                let summary = match err {
                    SelectionError::ExceedsPage { .. } => "Too large",
                    _ => "Invalid number",
                };
                self.model.ui.show_toast_for(
                    ToastSeverity::Error,
                    summary,
                    err.to_string(),
                    VALIDATION_TOAST_LIFE_MS,
                );
            }
        }
    }

    fn warn_still_loading(&mut self) {
        self.model.show_toast(
            ToastSeverity::Warn,
            "Please wait",
            SelectionError::StillLoading.to_string(),
        );
    }
}
