use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the per-project / per-user data directory
pub const DATA_DIR_NAME: &str = ".daylog";

/// Journal file name, kept from the first version so old saves still load
pub const JOURNAL_FILE_NAME: &str = "naplo_adatok.json";

/// Get the data directory - checks for local .daylog first, then falls back to global ~/.daylog
pub fn get_data_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;

    if let Some(local_dir) = find_local_dir(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Find local .daylog directory by walking up the directory tree
fn find_local_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        current = current.parent()?;
    }
}

/// Ensure the data directory exists
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = get_data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .daylog directory in the current directory
pub fn init_local_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let data_dir = current_dir.join(DATA_DIR_NAME);

    if data_dir.exists() {
        anyhow::bail!("Data directory already exists: {}", data_dir.display());
    }

    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create directory: {}", data_dir.display()))?;

    Ok(data_dir)
}

/// Path to the journal file
///
/// A journal already sitting in the current directory wins over the data
/// directory, so files kept next to the old app keep opening.
pub fn journal_file() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(existing) = existing_journal_in(&current_dir) {
        return Ok(existing);
    }
    Ok(ensure_data_dir()?.join(JOURNAL_FILE_NAME))
}

/// The journal file directly inside `dir`, if there is one
fn existing_journal_in(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(JOURNAL_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Default path for a report ending on `end` (report-YYYY-MM-DD.md)
pub fn report_file(end: chrono::NaiveDate) -> Result<PathBuf> {
    let filename = format!("report-{}.md", end.format("%Y-%m-%d"));
    Ok(ensure_data_dir()?.join(filename))
}

/// Directory for rolling log files
pub fn log_dir() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join("logs"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Copy a file aside with a timestamp suffix (journal.bak.YYYYmmdd_HHMMSS.json)
pub fn backup_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = path.with_extension(format!("bak.{}.json", timestamp));

    fs::copy(path, &backup_path)
        .with_context(|| format!("Failed to backup file: {}", path.display()))?;

    Ok(backup_path)
}
