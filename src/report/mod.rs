pub mod generator;
pub mod stats;

pub use generator::generate_report;
pub use stats::{
    activity_window, rating_window, ActivityPoint, RatingPoint, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
