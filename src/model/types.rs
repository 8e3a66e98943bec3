//! Shared types for the Model

use std::time::Instant;

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Warn,
    Error,
}

/// Brief pop-up notification
#[derive(Clone, Debug)]
pub struct Toast {
    pub severity: ToastSeverity,
    pub summary: String,
    pub detail: String,
    pub shown_at: Instant,
    /// How long the toast stays up (milliseconds)
    pub life_ms: u64,
}

/// "Select first N rows" dialog state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkSelectState {
    /// Raw text typed into the count field
    pub input: String,
}

/// Outcome of applying a page response
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// Response matched the latest request and is now on screen
    Applied { page: u32, rows: usize },
    /// Latest request failed; the page is shown empty
    Failed {
        page: u32,
        summary: String,
        message: String,
    },
    /// Response belongs to a superseded request and was dropped
    Stale { generation: u64, page: u32 },
}
