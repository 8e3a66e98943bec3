//! API Response Handler
//!
//! Applies page fetch results from the background service. Only the response
//! to the latest request reaches the screen; stale ones are dropped by the
//! model.

use log::{debug, warn};

use artview::model::{PageOutcome, ToastSeverity};

use crate::services::ApiResponse;
use crate::App;

/// Handle API response from background service
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::PageResult {
            generation,
            page,
            result,
        } => match app.model.apply_page_response(generation, page, result) {
            PageOutcome::Applied { page, rows } => {
                debug!(
                    "[PageResult]: page={} rows={} selected_on_page={}",
                    page,
                    rows,
                    app.model.visible_selection().len()
                );
            }
            PageOutcome::Failed {
                page,
                summary,
                message,
            } => {
                warn!("[PageResult]: page={} failed: {}", page, message);
                app.model.show_toast(ToastSeverity::Error, summary, message);
            }
            PageOutcome::Stale { generation, page } => {
                debug!(
                    "[PageResult]: skipping stale response generation={} page={} (navigated away)",
                    generation, page
                );
            }
        },
    }
}
