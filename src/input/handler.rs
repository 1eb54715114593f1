use crate::app::AppState;
use crate::domain::Pane;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events, returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if app.ui_mode.is_editing() {
        handle_input_form_mode(app, key);
        return false;
    }
    handle_normal_mode(app, key)
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Day navigation
        KeyCode::Left | KeyCode::Char('h') => app.prev_day(),
        KeyCode::Right | KeyCode::Char('l') => app.next_day(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.go_to_today(),

        // Pane focus
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),

        // Selection
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Check / uncheck
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // Add task or activity (by focus)
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add(),

        // Remove task or activity
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.remove_selected(),

        // Rating
        KeyCode::Char('+') | KeyCode::Char('=') => app.increase_rating(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.decrease_rating(),

        // Reading
        KeyCode::Char('e') | KeyCode::Char('E') => app.start_edit_reading_title(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.start_edit_reading_pages(),
        KeyCode::Char(']') if app.focus == Pane::Reading => app.adjust_pages(1),
        KeyCode::Char('[') if app.focus == Pane::Reading => app.adjust_pages(-1),
        KeyCode::Char('}') if app.focus == Pane::Reading => app.adjust_pages(10),
        KeyCode::Char('{') if app.focus == Pane::Reading => app.adjust_pages(-10),

        // Save
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.save();
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,

        _ => {}
    }
    false
}

/// Handle keys while an input form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_form_add_char(c)
        }
        _ => {}
    }
}
