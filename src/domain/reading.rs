use serde::{Deserialize, Serialize};

/// Book read on a given day
///
/// The serialized field names are the ones used by existing journal files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEntry {
    #[serde(rename = "cim", default)]
    pub title: String,
    #[serde(rename = "oldalak", default)]
    pub pages: u32,
}

impl ReadingEntry {
    /// True when neither a title nor pages were recorded
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.pages == 0
    }
}
