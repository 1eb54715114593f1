use crate::app::AppState;
use crate::report::{ActivityPoint, RatingPoint};
use crate::ui::styles::{
    activity_bar_style, border_style, default_style, hint_style, rating_bar_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const BAR_WIDTH: u16 = 6;
const BAR_GAP: u16 = 1;

/// Value printed on a rating bar: the rating and its share of the week
fn rating_bar_text(point: &RatingPoint) -> String {
    format!("{} {:.0}%", point.rating.value(), point.share_percent)
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()))
}

fn render_empty(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(Line::styled(message, hint_style())).block(chart_block(title));
    f.render_widget(paragraph, area);
}

/// Ratings of the last seven days, each bar labelled with its share
pub fn render_rating_chart(f: &mut Frame, app: &AppState, area: Rect) {
    let title = " Ratings (7 days) ";
    let points = app.rating_points();
    if points.is_empty() {
        render_empty(f, area, title, "No ratings in this window.");
        return;
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.rating.value() as u64)
                .label(Line::from(p.day.short_label()))
                .text_value(rating_bar_text(p))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(title))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(rating_bar_style())
        .value_style(default_style())
        .data(BarGroup::default().bars(&bars))
        .max(10);

    f.render_widget(chart, area);
}

/// Checked-activity counts of the last seven days
pub fn render_activity_chart(f: &mut Frame, app: &AppState, area: Rect) {
    let title = " Activities done (7 days) ";
    let points: Vec<ActivityPoint> = app.activity_points();
    if points.is_empty() {
        render_empty(f, area, title, "No activity data in this window.");
        return;
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.completed as u64)
                .label(Line::from(p.day.short_label()))
        })
        .collect();

    let max = points.iter().map(|p| p.completed as u64).max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .block(chart_block(title))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(activity_bar_style())
        .value_style(default_style())
        .data(BarGroup::default().bars(&bars))
        .max(max);

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayKey, Rating};

    #[test]
    fn test_rating_bar_text() {
        let point = RatingPoint {
            day: "2024-03-02".parse::<DayKey>().unwrap(),
            rating: Rating::clamped(8),
            share_percent: 100.0 / 3.0,
        };
        assert_eq!(rating_bar_text(&point), "8 33%");
    }
}
