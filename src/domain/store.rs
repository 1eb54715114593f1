use super::day_key::DayKey;
use super::rating::Rating;
use super::reading::ReadingEntry;
use super::task::{new_task_id, Task};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Activity seeded into a brand new journal
pub const DEFAULT_ACTIVITY: &str = "Példa tevékenység";

/// Completion flags for one day, keyed by activity name
pub type ActivityMap = BTreeMap<String, bool>;

static EMPTY_READING: ReadingEntry = ReadingEntry {
    title: String::new(),
    pages: 0,
};

/// The whole journal: every day's record plus the shared activity list
///
/// Per-day maps are keyed by the `YYYY-MM-DD` string so documents with
/// unexpected keys survive a load/save cycle untouched. Fields missing from
/// a document fall back to their defaults one by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    pub tasks: BTreeMap<String, Vec<Task>>,
    pub activities: BTreeMap<String, ActivityMap>,
    pub ratings: BTreeMap<String, Rating>,
    pub reading: BTreeMap<String, ReadingEntry>,
    pub activity_list: Vec<String>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            activities: BTreeMap::new(),
            ratings: BTreeMap::new(),
            reading: BTreeMap::new(),
            activity_list: vec![DEFAULT_ACTIVITY.to_string()],
        }
    }
}

impl Store {
    /// Make sure every per-day map has an entry for `day`
    ///
    /// Idempotent. A new activity map starts with every known activity unchecked.
    pub fn ensure_day(&mut self, day: &DayKey) {
        let key = day.as_key();

        self.tasks.entry(key.clone()).or_default();

        if !self.activities.contains_key(&key) {
            let map = self
                .activity_list
                .iter()
                .map(|name| (name.clone(), false))
                .collect();
            self.activities.insert(key.clone(), map);
        }

        self.ratings.entry(key.clone()).or_default();
        self.reading.entry(key).or_default();
    }

    /// Whether `day` has been initialized
    pub fn has_day(&self, day: &DayKey) -> bool {
        let key = day.as_key();
        self.tasks.contains_key(&key)
            && self.activities.contains_key(&key)
            && self.ratings.contains_key(&key)
            && self.reading.contains_key(&key)
    }

    /// Day keys present in any per-day map, sorted
    pub fn day_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .tasks
            .keys()
            .chain(self.activities.keys())
            .chain(self.ratings.keys())
            .chain(self.reading.keys())
            .cloned()
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    // ---- activities ----

    /// Register a new activity and back-fill it as unchecked on every known day
    ///
    /// Returns `false` for blank or already-registered names.
    pub fn add_activity(&mut self, name: &str) -> bool {
        if name.trim().is_empty() || self.activity_list.iter().any(|n| n == name) {
            return false;
        }

        self.activity_list.push(name.to_string());
        for map in self.activities.values_mut() {
            map.insert(name.to_string(), false);
        }
        tracing::debug!(activity = name, "activity added");
        true
    }

    /// Forget an activity everywhere, including its per-day history
    pub fn remove_activity(&mut self, name: &str) -> bool {
        let Some(pos) = self.activity_list.iter().position(|n| n == name) else {
            return false;
        };

        self.activity_list.remove(pos);
        for map in self.activities.values_mut() {
            map.remove(name);
        }
        tracing::debug!(activity = name, "activity removed");
        true
    }

    /// Check or uncheck a registered activity for a day
    pub fn set_activity_done(&mut self, day: &DayKey, name: &str, value: bool) -> bool {
        if !self.activity_list.iter().any(|n| n == name) {
            return false;
        }
        self.ensure_day(day);
        if let Some(map) = self.activities.get_mut(&day.as_key()) {
            map.insert(name.to_string(), value);
        }
        true
    }

    /// Flip a registered activity for a day
    pub fn toggle_activity(&mut self, day: &DayKey, name: &str) -> bool {
        let current = self.activity_done(day, name);
        self.set_activity_done(day, name, !current)
    }

    pub fn activity_done(&self, day: &DayKey, name: &str) -> bool {
        self.activities
            .get(&day.as_key())
            .and_then(|map| map.get(name))
            .copied()
            .unwrap_or(false)
    }

    /// Number of checked activities on a day
    pub fn completed_activity_count(&self, day: &DayKey) -> usize {
        self.activities
            .get(&day.as_key())
            .map(|map| map.values().filter(|done| **done).count())
            .unwrap_or(0)
    }

    // ---- tasks ----

    /// Append a task stamped with the current local time
    ///
    /// Returns `false` for blank text.
    pub fn add_task(&mut self, day: &DayKey, text: &str) -> bool {
        self.add_task_at(day, text, chrono::Local::now().time())
    }

    /// Append a task stamped with a given time
    pub fn add_task_at(&mut self, day: &DayKey, text: &str, time: NaiveTime) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.ensure_day(day);
        let task = Task::at(self.fresh_task_id(), text.to_string(), time);
        tracing::debug!(day = %day, id = %task.id, "task added");
        self.tasks.entry(day.as_key()).or_default().push(task);
        true
    }

    pub fn remove_task(&mut self, day: &DayKey, id: &str) -> bool {
        let Some(list) = self.tasks.get_mut(&day.as_key()) else {
            return false;
        };
        let before = list.len();
        list.retain(|task| task.id != id);

        let removed = list.len() != before;
        if removed {
            tracing::debug!(day = %day, id, "task removed");
        }
        removed
    }

    pub fn set_task_completed(&mut self, day: &DayKey, id: &str, value: bool) -> bool {
        match self.find_task_mut(day, id) {
            Some(task) => {
                task.completed = value;
                true
            }
            None => false,
        }
    }

    pub fn toggle_task(&mut self, day: &DayKey, id: &str) -> bool {
        match self.find_task_mut(day, id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    pub fn tasks_for(&self, day: &DayKey) -> &[Task] {
        self.tasks
            .get(&day.as_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn find_task_mut(&mut self, day: &DayKey, id: &str) -> Option<&mut Task> {
        self.tasks
            .get_mut(&day.as_key())?
            .iter_mut()
            .find(|task| task.id == id)
    }

    /// Give every task with a blank or repeated id a fresh one
    ///
    /// Journals written before ids existed carry none. Returns how many
    /// tasks were renumbered.
    pub fn repair_task_ids(&mut self) -> usize {
        let mut seen: HashSet<String> = HashSet::new();
        let mut stale: Vec<(String, usize)> = Vec::new();

        for (key, list) in &self.tasks {
            for (index, task) in list.iter().enumerate() {
                if task.id.is_empty() || !seen.insert(task.id.clone()) {
                    stale.push((key.clone(), index));
                }
            }
        }

        for (key, index) in &stale {
            let id = loop {
                let id = new_task_id();
                if seen.insert(id.clone()) {
                    break id;
                }
            };
            if let Some(task) = self.tasks.get_mut(key).and_then(|list| list.get_mut(*index)) {
                task.id = id;
            }
        }

        stale.len()
    }

    /// Random ID not used by any task in the store
    fn fresh_task_id(&self) -> String {
        loop {
            let id = new_task_id();
            let taken = self
                .tasks
                .values()
                .flatten()
                .any(|task| task.id == id);
            if !taken {
                return id;
            }
        }
    }

    // ---- rating ----

    /// Set the day's rating; values outside 1..=10 are rejected
    pub fn set_rating(&mut self, day: &DayKey, value: i64) -> bool {
        let Some(rating) = Rating::new(value) else {
            return false;
        };
        self.ensure_day(day);
        self.ratings.insert(day.as_key(), rating);
        true
    }

    pub fn rating_for(&self, day: &DayKey) -> Rating {
        self.ratings
            .get(&day.as_key())
            .copied()
            .unwrap_or_default()
    }

    // ---- reading ----

    pub fn set_reading_title(&mut self, day: &DayKey, title: &str) {
        self.ensure_day(day);
        if let Some(entry) = self.reading.get_mut(&day.as_key()) {
            entry.title = title.to_string();
        }
    }

    pub fn set_reading_pages(&mut self, day: &DayKey, pages: u32) {
        self.ensure_day(day);
        if let Some(entry) = self.reading.get_mut(&day.as_key()) {
            entry.pages = pages;
        }
    }

    pub fn reading_for(&self, day: &DayKey) -> &ReadingEntry {
        self.reading.get(&day.as_key()).unwrap_or(&EMPTY_READING)
    }
}
