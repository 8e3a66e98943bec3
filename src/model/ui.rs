//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, and toasts.

use std::time::Instant;

use super::types::{BulkSelectState, Toast, ToastSeverity, VimCommandState};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// "Select first N rows" dialog
    pub bulk_select: Option<BulkSelectState>,

    /// Key help dialog
    pub show_help: bool,

    /// Current toast notification
    pub toast: Option<Toast>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            bulk_select: None,
            show_help: false,
            toast: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.bulk_select.is_some() || self.show_help
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.bulk_select = None;
        self.show_help = false;
    }

    /// Show toast message
    pub fn show_toast(&mut self, severity: ToastSeverity, summary: impl Into<String>, detail: impl Into<String>) {
        let life_ms = crate::logic::ui::toast_life_ms(severity);
        self.show_toast_for(severity, summary, detail, life_ms);
    }

    /// Show toast message with an explicit lifetime
    pub fn show_toast_for(
        &mut self,
        severity: ToastSeverity,
        summary: impl Into<String>,
        detail: impl Into<String>,
        life_ms: u64,
    ) {
        self.toast = Some(Toast {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            shown_at: Instant::now(),
            life_ms,
        });
    }

    /// Check if toast has outlived its lifetime
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some(toast) = &self.toast {
            crate::logic::ui::should_dismiss_toast(toast.shown_at.elapsed().as_millis(), toast.life_ms)
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}
