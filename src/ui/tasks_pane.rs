use crate::app::AppState;
use crate::domain::{Pane, Task};
use crate::ui::styles::{
    default_style, done_style, hint_style, pane_border, selected_style, struck_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One row of the task list
fn task_line(task: &Task) -> Line<'_> {
    let (checkbox, text_style) = if task.completed {
        (Span::styled("[x] ", done_style()), struck_style())
    } else {
        (Span::styled("[ ] ", default_style()), default_style())
    };

    Line::from(vec![
        checkbox,
        Span::styled(task.text.as_str(), text_style),
        Span::styled(format!("  {}", task.timestamp), hint_style()),
    ])
}

/// Render the task list of the current day
pub fn render_tasks_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Pane::Tasks;
    let tasks = app.store.tasks_for(&app.current_day);
    let done = tasks.iter().filter(|t| t.completed).count();

    let title = format!(" Tasks ({}/{}) ", done, tasks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border(focused))
        .title(Span::styled(title, title_style()));

    if tasks.is_empty() {
        let items = vec![ListItem::new(Line::styled(
            "No tasks yet. Press 'a' to add one.",
            hint_style(),
        ))];
        f.render_widget(List::new(items).block(block), area);
        return;
    }

    let items: Vec<ListItem> = tasks.iter().map(|t| ListItem::new(task_line(t))).collect();

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.task_index.min(tasks.len() - 1)));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style())
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut state);
}
