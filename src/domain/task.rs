use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format of the creation time stored on each task
pub const TIMESTAMP_FORMAT: &str = "%H:%M";

/// A to-do entry on one day's list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID (UUID v4 string); older journals have none
    #[serde(default)]
    pub id: String,
    /// Task text as entered
    pub text: String,
    /// Whether the task is checked off
    pub completed: bool,
    /// Local creation time, "HH:MM"
    pub timestamp: String,
}

impl Task {
    /// Create an open task stamped with the current local time
    pub fn new(id: String, text: String) -> Self {
        Self::at(id, text, Local::now().time())
    }

    /// Create an open task stamped with a given time
    pub fn at(id: String, text: String, time: NaiveTime) -> Self {
        Self {
            id,
            text,
            completed: false,
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Generate a random task ID
pub fn new_task_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_at() {
        let time = NaiveTime::from_hms_opt(9, 5, 42).unwrap();
        let task = Task::at("id-1".to_string(), "Buy milk".to_string(), time);

        assert_eq!(task.timestamp, "09:05");
        assert!(!task.completed);
    }

    #[test]
    fn test_toggle() {
        let mut task = Task::new(new_task_id(), "Read".to_string());
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_new_task_id_is_uuid() {
        let id = new_task_id();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, new_task_id());
    }

    #[test]
    fn test_json_shape() {
        let time = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
        let task = Task::at("abc".to_string(), "Walk".to_string(), time);
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "text": "Walk",
                "completed": false,
                "timestamp": "18:30"
            })
        );
    }
}
