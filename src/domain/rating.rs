use serde::{Deserialize, Serialize};

/// Daily mood rating on a 1..=10 scale
///
/// Stored as a bare integer. Values outside the scale found in a document
/// are clamped when read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

/// Mood emoji per rating step, lowest first
const EMOJIS: [&str; 10] = ["😢", "😟", "😐", "🙂", "😊", "😃", "😄", "😁", "🌟", "🤩"];

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: Rating = Rating(5);

    /// Exact constructor, `None` outside 1..=10
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Constructor that clamps into 1..=10
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// One step up, saturating at 10
    pub fn increment(&self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    /// One step down, saturating at 1
    pub fn decrement(&self) -> Self {
        Self::clamped(self.0 as i64 - 1)
    }

    /// Emoji for this rating
    pub fn emoji(&self) -> &'static str {
        EMOJIS[(self.0 - Self::MIN) as usize]
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Rating::new(0), None);
        assert_eq!(Rating::new(11), None);
        assert_eq!(Rating::new(-3), None);
        assert_eq!(Rating::new(1).map(|r| r.value()), Some(1));
        assert_eq!(Rating::new(10).map(|r| r.value()), Some(10));
    }

    #[test]
    fn test_step_saturates() {
        let top = Rating::new(10).unwrap();
        assert_eq!(top.increment(), top);

        let bottom = Rating::new(1).unwrap();
        assert_eq!(bottom.decrement(), bottom);

        assert_eq!(Rating::DEFAULT.increment().value(), 6);
    }

    #[test]
    fn test_emoji_scale() {
        assert_eq!(Rating::new(1).unwrap().emoji(), "😢");
        assert_eq!(Rating::DEFAULT.emoji(), "😊");
        assert_eq!(Rating::new(10).unwrap().emoji(), "🤩");
    }

    #[test]
    fn test_deserialize_clamps() {
        let high: Rating = serde_json::from_str("42").unwrap();
        let low: Rating = serde_json::from_str("0").unwrap();
        let ok: Rating = serde_json::from_str("7").unwrap();

        assert_eq!(high.value(), 10);
        assert_eq!(low.value(), 1);
        assert_eq!(ok.value(), 7);
        assert_eq!(serde_json::to_string(&ok).unwrap(), "7");
    }
}
