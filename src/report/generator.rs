use crate::domain::{DayKey, Store};
use crate::persistence::{atomic_write, report_file};
use crate::report::stats::{activity_window, rating_window, window_summary};
use anyhow::Result;
use std::path::PathBuf;

/// Render a Markdown summary of the `days` days ending at `end`
pub fn render_report(store: &Store, end: DayKey, days: u32) -> String {
    let summary = window_summary(store, end, days);
    let ratings = rating_window(store, end, days);
    let activity = activity_window(store, end, days);

    let mut report = String::new();

    report.push_str(&format!(
        "# Journal Report - {} to {}\n\n",
        summary.start.display(),
        summary.end.display()
    ));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Days logged:** {}\n", summary.days_logged));
    report.push_str(&format!(
        "- **Tasks:** {} created, {} completed\n",
        summary.tasks_created, summary.tasks_completed
    ));
    match summary.average_rating {
        Some(avg) => report.push_str(&format!("- **Average rating:** {:.1} / 10\n", avg)),
        None => report.push_str("- **Average rating:** -\n"),
    }
    if let Some((day, rating)) = summary.best_day {
        report.push_str(&format!(
            "- **Best day:** {} ({} {})\n",
            day.display(),
            rating.value(),
            rating.emoji()
        ));
    }
    report.push_str(&format!("- **Pages read:** {}\n", summary.pages_read));
    if !summary.books.is_empty() {
        report.push_str(&format!("- **Books:** {}\n", summary.books.join(", ")));
    }
    report.push('\n');

    // Ratings Section
    report.push_str("## Ratings\n\n");
    if ratings.is_empty() {
        report.push_str("_No ratings in this period._\n\n");
    } else {
        report.push_str("| Day | Rating | Share |\n");
        report.push_str("|-----|--------|-------|\n");
        for point in &ratings {
            report.push_str(&format!(
                "| {} | {} {} | {:.1}% |\n",
                point.day.display(),
                point.rating.value(),
                point.rating.emoji(),
                point.share_percent
            ));
        }
        report.push('\n');
    }

    // Activities Section
    report.push_str("## Activities\n\n");
    if activity.is_empty() {
        report.push_str("_No activities tracked in this period._\n\n");
    } else {
        report.push_str("| Day | Completed |\n");
        report.push_str("|-----|-----------|\n");
        for point in &activity {
            report.push_str(&format!(
                "| {} | {} {} |\n",
                point.day.display(),
                point.completed,
                "#".repeat(point.completed)
            ));
        }
        report.push('\n');
    }

    if !summary.activity_totals.is_empty() {
        report.push_str("### Per activity\n\n");
        for (name, count) in &summary.activity_totals {
            report.push_str(&format!("- {}: {} day{}\n", name, count, if *count == 1 { "" } else { "s" }));
        }
        report.push('\n');
    }

    report
}

/// Render the report and write it to `output_path` (default: the data directory)
pub fn generate_report(
    store: &Store,
    end: DayKey,
    days: u32,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let content = render_report(store, end, days);

    let path = match output_path {
        Some(path) => path,
        None => report_file(end.date())?,
    };

    atomic_write(&path, &content)?;
    tracing::info!(path = %path.display(), end = %end, days, "report written");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_ACTIVITY;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_render_empty_report() {
        let store = Store::default();
        let report = render_report(&store, day("2024-01-07"), 7);

        assert!(report.starts_with("# Journal Report - 2024.01.01 to 2024.01.07"));
        assert!(report.contains("- **Days logged:** 0"));
        assert!(report.contains("- **Average rating:** -"));
        assert!(report.contains("_No ratings in this period._"));
        assert!(report.contains("_No activities tracked in this period._"));
        assert!(report.contains(&format!("- {}: 0 days", DEFAULT_ACTIVITY)));
    }

    #[test]
    fn test_render_report_with_data() {
        let mut store = Store::default();
        let d = day("2024-01-07");
        store.ensure_day(&d);
        store.set_rating(&d, 8);
        store.set_activity_done(&d, DEFAULT_ACTIVITY, true);
        store.add_task(&d, "Write report");
        store.set_reading_title(&d, "Middlemarch");
        store.set_reading_pages(&d, 20);

        let report = render_report(&store, d, 7);

        assert!(report.contains("- **Tasks:** 1 created, 0 completed"));
        assert!(report.contains("- **Average rating:** 8.0 / 10"));
        assert!(report.contains("- **Best day:** 2024.01.07 (8 😁)"));
        assert!(report.contains("- **Books:** Middlemarch"));
        assert!(report.contains("| 2024.01.07 | 8 😁 | 100.0% |"));
        assert!(report.contains("| 2024.01.07 | 1 # |"));
        assert!(report.contains(&format!("- {}: 1 day\n", DEFAULT_ACTIVITY)));
    }

    #[test]
    fn test_generate_report_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("week.md");

        let path = generate_report(&Store::default(), day("2024-01-07"), 7, Some(output.clone())).unwrap();

        assert_eq!(path, output);
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("## Summary"));
    }
}
