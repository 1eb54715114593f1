use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Modal title and field label for each editing mode
fn form_labels(mode: UiMode) -> (&'static str, &'static str) {
    match mode {
        UiMode::AddingTask => (" Add Task ", "Task:"),
        UiMode::AddingActivity => (" Register Activity ", "Activity name:"),
        UiMode::EditingReadingTitle => (" Book Title ", "Title:"),
        UiMode::EditingReadingPages => (" Pages Read ", "Pages (digits only):"),
        UiMode::Normal => (" Input ", ""),
    }
}

/// Render the single-field input form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let (title_text, label) = form_labels(app.ui_mode);

        let lines = vec![
            Line::raw(label),
            Line::from(vec![
                Span::raw("> "),
                Span::styled(form.value.as_str(), modal_title_style()),
                Span::styled("█", modal_title_style()), // Cursor
            ]),
            Line::raw(""),
            Line::raw("Enter to submit  ·  Esc to cancel"),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
