use crate::app::AppState;
use crate::domain::{Pane, Rating};
use crate::ui::styles::{border_style, default_style, hint_style, pane_border, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the current day's reading entry
pub fn render_reading_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Pane::Reading;
    let entry = app.store.reading_for(&app.current_day);

    let title_line = if entry.title.is_empty() {
        Line::from(vec![
            Span::raw("Book: "),
            Span::styled("(none, press 'e')", hint_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("Book: "),
            Span::styled(entry.title.as_str(), default_style()),
        ])
    };

    let pages_line = Line::from(vec![
        Span::raw("Pages: "),
        Span::styled(entry.pages.to_string(), default_style()),
        Span::styled("   [ ] ±1  { } ±10", hint_style()),
    ]);

    let paragraph = Paragraph::new(vec![title_line, pages_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(pane_border(focused))
            .title(Span::styled(" Reading ", title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Text gauge for a rating, e.g. "■■■■■□□□□□ 5/10"
fn rating_gauge(rating: Rating) -> String {
    let filled = rating.value() as usize;
    let empty = (Rating::MAX as usize).saturating_sub(filled);
    format!(
        "{}{} {}/{}",
        "■".repeat(filled),
        "□".repeat(empty),
        rating.value(),
        Rating::MAX
    )
}

/// Render the current day's rating
pub fn render_rating_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rating = app.store.rating_for(&app.current_day);

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{}  ", rating.emoji())),
            Span::styled(rating_gauge(rating), default_style()),
        ]),
        Line::styled("+ / - to adjust", hint_style()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Day rating ", title_style())),
    );

    f.render_widget(paragraph, area);
}
