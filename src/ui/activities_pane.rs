use crate::app::AppState;
use crate::domain::Pane;
use crate::ui::styles::{default_style, done_style, hint_style, pane_border, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the registered activities with the current day's check marks
pub fn render_activities_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Pane::Activities;
    let names = &app.store.activity_list;
    let done = app.store.completed_activity_count(&app.current_day);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border(focused))
        .title(Span::styled(
            format!(" Activities ({}/{}) ", done, names.len()),
            title_style(),
        ));

    if names.is_empty() {
        let items = vec![ListItem::new(Line::styled(
            "No activities. Press 'a' to register one.",
            hint_style(),
        ))];
        f.render_widget(List::new(items).block(block), area);
        return;
    }

    let items: Vec<ListItem> = names
        .iter()
        .map(|name| {
            let line = if app.store.activity_done(&app.current_day, name) {
                Line::from(vec![
                    Span::styled("✔ ", done_style()),
                    Span::styled(name.as_str(), done_style()),
                ])
            } else {
                Line::from(vec![
                    Span::styled("· ", hint_style()),
                    Span::styled(name.as_str(), default_style()),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.activity_index.min(names.len() - 1)));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style())
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut state);
}
