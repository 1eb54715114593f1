use crate::app::AppState;
use crate::domain::{DayKey, NoticeKind};
use crate::ui::styles::{error_style, header_style, hint_style, success_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ←/→ day   "),
        Span::raw("t today   "),
        Span::raw("Tab pane   "),
        Span::raw("↑/↓ select   "),
        Span::raw("Space check   "),
        Span::raw("a add   "),
        Span::raw("x remove   "),
        Span::raw("+/- rating   "),
        Span::raw("e book   "),
        Span::raw("p pages   "),
        Span::raw("s save   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

/// Header text for the selected day
fn day_header(day: DayKey, today: DayKey) -> String {
    let weekday = day.date().format("%A");
    if day == today {
        format!("◀  {} {} (today)  ▶", day.display(), weekday)
    } else {
        format!("◀  {} {}  ▶", day.display(), weekday)
    }
}

/// Render the date header
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let text = day_header(app.current_day, DayKey::today());
    let paragraph = Paragraph::new(Line::styled(text, header_style()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Daily journal ", title_style())),
        );
    f.render_widget(paragraph, area);
}

/// Render the status line: the active notice, else the journal path
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let line = match &app.notice {
        Some(notice) => {
            let style = match notice.kind {
                NoticeKind::Success => success_style(),
                NoticeKind::Error => error_style(),
            };
            Line::styled(format!(" {}", notice.message), style)
        }
        None => Line::styled(
            format!(" {}", app.journal_path.display()),
            hint_style(),
        ),
    };

    f.render_widget(Paragraph::new(line), area);
}
