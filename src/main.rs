mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod report;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::DayKey;
use persistence::{init_local_dir, journal_file, load_or_default, load_store, log_dir};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::level_filters::LevelFilter;

/// How often the event loop wakes up without input
const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "daylog")]
#[command(about = "A terminal daily journal: tasks, habits, reading and mood", long_about = None)]
struct Cli {
    /// Journal file to use instead of ./naplo_adatok.json or <data dir>/naplo_adatok.json
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace). Defaults to RUST_LOG, then info
    #[arg(long = "log-filter", global = true)]
    log_filter: Option<LevelFilter>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .daylog directory in the current directory
    Init,
    /// Write a Markdown summary of the days ending at a date
    Report {
        /// Last day of the report (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Number of days covered
        #[arg(
            long,
            default_value_t = report::DEFAULT_WINDOW_DAYS,
            value_parser = clap::value_parser!(u32).range(1..=report::MAX_WINDOW_DAYS as i64)
        )]
        days: u32,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized daylog directory: {}", data_dir.display());
            println!();
            println!("daylog will now keep its journal in this local directory.");
            println!("Run 'daylog' to open it.");
            Ok(())
        }
        Some(Commands::Report { date, days, output }) => {
            logging::enable_logging(&log_dir()?, cli.log_filter)?;

            let end = match date {
                Some(date_str) => date_str
                    .parse::<DayKey>()
                    .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?,
                None => DayKey::today(),
            };

            let path = resolve_journal(cli.file)?;
            let store = load_store(&path)?;

            println!("Generating report for {} day(s) ending {}...", days, end.display());
            let report_path = report::generate_report(&store, end, days, output)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(cli.file, cli.log_filter),
    }
}

/// The `--file` override, else `./naplo_adatok.json` if present, else the data directory
fn resolve_journal(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => journal_file(),
    }
}

fn run_tui(file: Option<PathBuf>, log_filter: Option<LevelFilter>) -> Result<()> {
    logging::enable_logging(&log_dir()?, log_filter)?;

    let journal_path = resolve_journal(file)?;
    tracing::info!(path = %journal_path.display(), "starting dashboard");

    let (store, load_error) = load_or_default(&journal_path);

    let mut app = AppState::new(store, journal_path, DayKey::today());
    if let Some(err) = &load_error {
        app.report_load_error(err);
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Pending structural edits are written before leaving
    if let Err(err) = app.flush_autosave() {
        eprintln!("{}", err);
    }

    if let Err(err) = &result {
        tracing::error!(error = %err, "dashboard stopped with an error");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.expire_notice(Instant::now());

        // Autosave if needed; failures are already in the status line
        let _ = app.flush_autosave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_days_defaults_to_a_week() {
        let cli = Cli::try_parse_from(["daylog", "report"]).unwrap();
        match cli.command {
            Some(Commands::Report { days, .. }) => assert_eq!(days, report::DEFAULT_WINDOW_DAYS),
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_report_days_is_bounded() {
        assert!(Cli::try_parse_from(["daylog", "report", "--days", "200000000"]).is_err());
        assert!(Cli::try_parse_from(["daylog", "report", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["daylog", "report", "--days", "3660"]).is_ok());
    }
}
