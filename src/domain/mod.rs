pub mod day_key;
pub mod enums;
pub mod rating;
pub mod reading;
pub mod store;
pub mod task;

pub use day_key::DayKey;
pub use enums::{NoticeKind, Pane, UiMode};
pub use rating::Rating;
pub use store::{Store, DEFAULT_ACTIVITY};
pub use task::Task;
