use crate::domain::{DayKey, Rating, Store};

/// Default window for charts and reports
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Longest window a report may cover (about ten years)
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// One slice of the ratings chart
#[derive(Debug, Clone, PartialEq)]
pub struct RatingPoint {
    pub day: DayKey,
    pub rating: Rating,
    /// Share of the window's rating total, 0..=100
    pub share_percent: f64,
}

/// One bar of the activity chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPoint {
    pub day: DayKey,
    pub completed: usize,
}

/// Totals over a window of days
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSummary {
    pub start: DayKey,
    pub end: DayKey,
    pub days_logged: usize,
    pub tasks_created: usize,
    pub tasks_completed: usize,
    pub average_rating: Option<f64>,
    pub best_day: Option<(DayKey, Rating)>,
    pub pages_read: u64,
    /// Distinct titles in order of first appearance
    pub books: Vec<String>,
    /// Days each registered activity was checked, in list order
    pub activity_totals: Vec<(String, usize)>,
}

/// Days of the window ending at `end`, oldest first
///
/// The length is clamped to 1..=MAX_WINDOW_DAYS and days before the start of
/// the calendar are skipped.
fn window(end: DayKey, days: u32) -> impl Iterator<Item = DayKey> {
    let days = days.clamp(1, MAX_WINDOW_DAYS) as i64;
    (0..days).rev().filter_map(move |back| end.checked_offset(-back))
}

/// Ratings of the days in the window that have one
pub fn rating_window(store: &Store, end: DayKey, days: u32) -> Vec<RatingPoint> {
    let rated: Vec<(DayKey, Rating)> = window(end, days)
        .filter_map(|day| store.ratings.get(&day.as_key()).map(|r| (day, *r)))
        .collect();

    let total: u32 = rated.iter().map(|(_, r)| r.value() as u32).sum();

    rated
        .into_iter()
        .map(|(day, rating)| {
            let share_percent = if total > 0 {
                rating.value() as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            RatingPoint {
                day,
                rating,
                share_percent,
            }
        })
        .collect()
}

/// Checked-activity counts for the days in the window that have an activity map
pub fn activity_window(store: &Store, end: DayKey, days: u32) -> Vec<ActivityPoint> {
    window(end, days)
        .filter(|day| store.activities.contains_key(&day.as_key()))
        .map(|day| ActivityPoint {
            day,
            completed: store.completed_activity_count(&day),
        })
        .collect()
}

/// Summarize tasks, ratings, reading and activities over the window
pub fn window_summary(store: &Store, end: DayKey, days: u32) -> WindowSummary {
    let days_in_window: Vec<DayKey> = window(end, days).collect();
    let start = days_in_window.first().copied().unwrap_or(end);

    let mut days_logged = 0;
    let mut tasks_created = 0;
    let mut tasks_completed = 0;
    let mut rating_sum = 0u32;
    let mut rating_count = 0u32;
    let mut best_day: Option<(DayKey, Rating)> = None;
    let mut pages_read = 0u64;
    let mut books: Vec<String> = Vec::new();
    let known_days = store.day_keys();

    for day in &days_in_window {
        let key = day.as_key();
        if known_days.contains(&key) {
            days_logged += 1;
        }

        let tasks = store.tasks_for(day);
        tasks_created += tasks.len();
        tasks_completed += tasks.iter().filter(|t| t.completed).count();

        if let Some(rating) = store.ratings.get(&key) {
            rating_sum += rating.value() as u32;
            rating_count += 1;
            // Later days win ties
            if best_day.map_or(true, |(_, best)| *rating >= best) {
                best_day = Some((*day, *rating));
            }
        }

        let reading = store.reading_for(day);
        pages_read += reading.pages as u64;
        let title = reading.title.trim();
        if !title.is_empty() && !books.iter().any(|b| b == title) {
            books.push(title.to_string());
        }
    }

    let activity_totals = store
        .activity_list
        .iter()
        .map(|name| {
            let count = days_in_window
                .iter()
                .filter(|day| store.activity_done(day, name))
                .count();
            (name.clone(), count)
        })
        .collect();

    let average_rating = if rating_count > 0 {
        Some(rating_sum as f64 / rating_count as f64)
    } else {
        None
    };

    WindowSummary {
        start,
        end,
        days_logged,
        tasks_created,
        tasks_completed,
        average_rating,
        best_day,
        pages_read,
        books,
        activity_totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn sample_store() -> Store {
        let mut store = Store {
            activity_list: Vec::new(),
            ..Store::default()
        };
        store.add_activity("Run");
        store.add_activity("Read");

        // 2024-01-01 .. 2024-01-05 visited, 01-03 skipped
        for key in ["2024-01-01", "2024-01-02", "2024-01-04", "2024-01-05"] {
            store.ensure_day(&day(key));
        }
        store.set_rating(&day("2024-01-01"), 2);
        store.set_rating(&day("2024-01-02"), 8);
        store.set_rating(&day("2024-01-04"), 6);
        store.set_rating(&day("2024-01-05"), 4);

        store.set_activity_done(&day("2024-01-02"), "Run", true);
        store.set_activity_done(&day("2024-01-02"), "Read", true);
        store.set_activity_done(&day("2024-01-05"), "Read", true);

        store.add_task(&day("2024-01-04"), "one");
        store.add_task(&day("2024-01-04"), "two");
        let id = store.tasks_for(&day("2024-01-04"))[0].id.clone();
        store.set_task_completed(&day("2024-01-04"), &id, true);

        store.set_reading_title(&day("2024-01-01"), "Dune");
        store.set_reading_pages(&day("2024-01-01"), 30);
        store.set_reading_title(&day("2024-01-02"), "Dune");
        store.set_reading_pages(&day("2024-01-02"), 12);
        store.set_reading_title(&day("2024-01-05"), "Emma");
        store.set_reading_pages(&day("2024-01-05"), 5);
        store
    }

    #[test]
    fn test_rating_window_skips_unvisited_days() {
        let store = sample_store();
        let points = rating_window(&store, day("2024-01-05"), 7);

        let days: Vec<String> = points.iter().map(|p| p.day.as_key()).collect();
        assert_eq!(days, vec!["2024-01-01", "2024-01-02", "2024-01-04", "2024-01-05"]);

        // 2 + 8 + 6 + 4 = 20
        assert!((points[1].share_percent - 40.0).abs() < 1e-9);
        let total: f64 = points.iter().map(|p| p.share_percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rating_window_respects_size() {
        let store = sample_store();
        let points = rating_window(&store, day("2024-01-05"), 2);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].day, day("2024-01-04"));

        assert!(rating_window(&store, day("2023-06-01"), 7).is_empty());
    }

    #[test]
    fn test_oversized_window_is_clamped() {
        let store = sample_store();
        let summary = window_summary(&store, day("2024-01-05"), 200_000_000);

        assert_eq!(summary.end, day("2024-01-05"));
        assert_eq!(summary.start, day("2024-01-05").offset(-(MAX_WINDOW_DAYS as i64 - 1)));
        assert_eq!(rating_window(&store, day("2024-01-05"), u32::MAX).len(), 4);
    }

    #[test]
    fn test_window_near_calendar_start() {
        let first = DayKey::new(chrono::NaiveDate::MIN);
        assert!(first.checked_offset(-1).is_none());

        let store = Store::default();
        let summary = window_summary(&store, first.offset(2), 7);
        assert_eq!(summary.start, first);
    }

    #[test]
    fn test_activity_window() {
        let store = sample_store();
        let points = activity_window(&store, day("2024-01-05"), 7);

        let counts: Vec<(String, usize)> = points
            .iter()
            .map(|p| (p.day.as_key(), p.completed))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("2024-01-01".to_string(), 0),
                ("2024-01-02".to_string(), 2),
                ("2024-01-04".to_string(), 0),
                ("2024-01-05".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_window_summary() {
        let store = sample_store();
        let summary = window_summary(&store, day("2024-01-05"), 7);

        assert_eq!(summary.start, day("2023-12-30"));
        assert_eq!(summary.end, day("2024-01-05"));
        assert_eq!(summary.days_logged, 4);
        assert_eq!(summary.tasks_created, 2);
        assert_eq!(summary.tasks_completed, 1);
        assert_eq!(summary.average_rating, Some(5.0));
        assert_eq!(summary.best_day.map(|(d, r)| (d, r.value())), Some((day("2024-01-02"), 8)));
        assert_eq!(summary.pages_read, 47);
        assert_eq!(summary.books, vec!["Dune".to_string(), "Emma".to_string()]);
        assert_eq!(
            summary.activity_totals,
            vec![("Run".to_string(), 1), ("Read".to_string(), 2)]
        );
    }

    #[test]
    fn test_summary_of_empty_window() {
        let store = Store::default();
        let summary = window_summary(&store, day("2024-01-05"), 0);

        assert_eq!(summary.start, day("2024-01-05"));
        assert_eq!(summary.days_logged, 0);
        assert_eq!(summary.average_rating, None);
        assert_eq!(summary.best_day, None);
        assert!(summary.books.is_empty());
    }
}
