use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub activities_area: Rect,
    pub reading_area: Rect,
    pub rating_area: Rect,
    pub tasks_area: Rect,
    pub rating_chart_area: Rect,
    pub activity_chart_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row), then the date header (3 rows)
/// - Main area: Left column (35%) | Right column (65%)
///   - Left: Activities / Reading / Rating
///   - Right: Tasks above the two charts
/// - Bottom: status line (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Date header
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Left column
            Constraint::Percentage(65), // Right column
        ])
        .split(main_chunks[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Activities
            Constraint::Length(4), // Reading
            Constraint::Length(4), // Rating
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Tasks
            Constraint::Percentage(45), // Charts
        ])
        .split(columns[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Ratings chart
            Constraint::Percentage(50), // Activity chart
        ])
        .split(right[1]);

    MainLayout {
        keybindings_area: main_chunks[0],
        header_area: main_chunks[1],
        activities_area: left[0],
        reading_area: left[1],
        rating_area: left[2],
        tasks_area: right[0],
        rating_chart_area: charts[0],
        activity_chart_area: charts[1],
        status_area: main_chunks[3],
    }
}

/// Create centered modal area (for input forms)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.reading_area.height, 4);
        assert_eq!(layout.rating_area.height, 4);
        assert!(layout.activities_area.height >= 4);
        assert!(layout.tasks_area.height > 0);
        assert!(layout.tasks_area.width > layout.activities_area.width);
        assert_eq!(layout.rating_chart_area.y, layout.activity_chart_area.y);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 7);
    }
}
