pub mod activities_pane;
pub mod charts_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod reading_pane;
pub mod styles;
pub mod tasks_pane;

use crate::app::AppState;
use activities_pane::render_activities_pane;
use charts_pane::{render_activity_chart, render_rating_chart};
use input_form::render_input_form;
use keybindings::{render_header, render_keybindings, render_status_line};
use layout::create_layout;
use ratatui::Frame;
use reading_pane::{render_rating_pane, render_reading_pane};
use tasks_pane::render_tasks_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_header(f, app, layout.header_area);

    // Left column
    render_activities_pane(f, app, layout.activities_area);
    render_reading_pane(f, app, layout.reading_area);
    render_rating_pane(f, app, layout.rating_area);

    // Right column
    render_tasks_pane(f, app, layout.tasks_area);
    render_rating_chart(f, app, layout.rating_chart_area);
    render_activity_chart(f, app, layout.activity_chart_area);

    render_status_line(f, app, layout.status_area);

    // Input form draws over everything
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
