use crate::App;
use ratatui::Frame;

use artview::logic;

use super::{dialogs, header, layout, legend, status_bar, table, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let model = &app.model;

    let has_total = model.catalog.total_pages.is_some();
    let legend_height = legend::calculate_legend_height(size.width, model.ui.vim_mode, has_total);
    let layout_info = layout::calculate_layout(size, legend_height);

    header::render_header(f, layout_info.header_area, model.selection.len());

    table::render_table(
        f,
        layout_info.table_area,
        &model.catalog.items,
        &model.selection,
        model.catalog.cursor,
        model.is_loading(),
    );

    if let Some(legend_area) = layout_info.legend_area {
        legend::render_legend(f, legend_area, model.ui.vim_mode, has_total);
    }

    let status = status_bar::StatusInfo {
        page: model.catalog.page,
        total_pages: model.catalog.total_pages,
        rows_on_page: model.catalog.items.len(),
        selected_on_page: logic::selection::selected_on_page(&model.catalog.items, &model.selection),
        total_selected: model.selection.len(),
        loading_page: model.requests.pending_page(),
        last_load_time_ms: model.catalog.last_load_time_ms,
    };
    status_bar::render_status_bar(f, layout_info.status_area, &status);

    // Dialogs draw over everything else
    if let Some(state) = &model.ui.bulk_select {
        dialogs::render_bulk_select(f, &state.input, model.catalog.items.len());
    } else if model.ui.show_help {
        dialogs::render_help(f, model.ui.vim_mode);
    }

    // Toast last so it stays visible over dialogs
    if let Some(active) = &model.ui.toast {
        toast::render_toast(f, size, active);
    }
}
