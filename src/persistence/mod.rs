pub mod files;
pub mod journal;

pub use files::{atomic_write, backup_file, init_local_dir, journal_file, log_dir, report_file};
pub use journal::{load_or_default, load_store, save_store, StoreError};
