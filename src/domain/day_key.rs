use chrono::{Duration, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Canonical storage format for day keys
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format used in headers and chart labels
pub const DISPLAY_FORMAT: &str = "%Y.%m.%d";

/// A calendar day, addressed by its `YYYY-MM-DD` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today in local time
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day before
    pub fn prev(&self) -> Self {
        Self(self.0 - Duration::days(1))
    }

    /// The day after
    pub fn next(&self) -> Self {
        Self(self.0 + Duration::days(1))
    }

    /// Shift by a signed number of days
    pub fn offset(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Like `offset`, but `None` outside the representable calendar
    pub fn checked_offset(&self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Key as stored in the journal file
    pub fn as_key(&self) -> String {
        self.0.format(DAY_KEY_FORMAT).to_string()
    }

    /// Human-readable form ("2024.01.31")
    pub fn display(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }

    /// Short label for chart axes ("01.31")
    pub fn short_label(&self) -> String {
        self.0.format("%m.%d").to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT).map(Self)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
