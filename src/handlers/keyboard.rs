//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Open dialogs get the
//! keys first; everything else drives the table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use artview::model::VimCommandState;

use crate::App;

/// Longest count the bulk-select field accepts
const MAX_COUNT_DIGITS: usize = 6;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    // Handle bulk-select dialog
    if app.model.ui.bulk_select.is_some() {
        handle_bulk_select_key(app, key);
        return;
    }

    // Help dialog: any key closes it
    if app.model.has_modal() {
        app.model.close_all_modals();
        return;
    }

    // Two-key vim sequence: 'gg' jumps to the first page
    let waiting_for_g = app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.model.ui.show_help = true;
        }

        // Rows
        KeyCode::Down => app.model.move_cursor_down(),
        KeyCode::Up => app.model.move_cursor_up(),
        KeyCode::Char('j') if app.model.ui.vim_mode => app.model.move_cursor_down(),
        KeyCode::Char('k') if app.model.ui.vim_mode => app.model.move_cursor_up(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_cursor_row(),
        KeyCode::Char('a') => app.toggle_current_page(),
        KeyCode::Char('s') => app.open_bulk_select(),

        // Pages
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => app.next_page(),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => app.prev_page(),
        KeyCode::Char('l') if app.model.ui.vim_mode => app.next_page(),
        KeyCode::Char('h') if app.model.ui.vim_mode => app.prev_page(),
        KeyCode::Home => app.first_page(),
        KeyCode::End => app.last_page(),
        KeyCode::Char('g') if app.model.ui.vim_mode => {
            if waiting_for_g {
                app.first_page();
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if app.model.ui.vim_mode => app.last_page(),
        KeyCode::Char('r') => app.reload_page(),

        _ => {}
    }
}

/// Keys for the "select first N rows" dialog
fn handle_bulk_select_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.confirm_bulk_select(),
        KeyCode::Esc => app.close_bulk_select(),
        code => {
            let Some(state) = app.model.ui.bulk_select.as_mut() else {
                return;
            };
            match code {
                KeyCode::Backspace => {
                    state.input.pop();
                }
                // Spinner buttons
                KeyCode::Up => {
                    let n = state.input.trim().parse::<i64>().unwrap_or(0);
                    let next = (n + 1).to_string();
                    if next.len() <= MAX_COUNT_DIGITS {
                        state.input = next;
                    }
                }
                KeyCode::Down => {
                    let n = state.input.trim().parse::<i64>().unwrap_or(2);
                    state.input = (n - 1).max(1).to_string();
                }
                KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                    if state.input.len() < MAX_COUNT_DIGITS {
                        state.input.push(c);
                    }
                }
                _ => {
                    // Ignore other keys while the dialog is showing
                }
            }
        }
    }
}
