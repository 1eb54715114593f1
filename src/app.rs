use crate::domain::{DayKey, NoticeKind, Pane, Store, UiMode};
use crate::persistence::{save_store, StoreError};
use crate::report::{activity_window, rating_window, ActivityPoint, RatingPoint, DEFAULT_WINDOW_DAYS};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long a status-line notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Input form state for adding entries and editing reading fields
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub value: String,
}

/// Message shown in the status line
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub shown_at: Instant,
}

/// Main application state
pub struct AppState {
    pub store: Store,
    pub journal_path: PathBuf,
    pub current_day: DayKey,
    pub focus: Pane,
    pub task_index: usize,
    pub activity_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub notice: Option<Notice>,
    /// Set by structural edits, flushed by the event loop
    pub needs_save: bool,
}

impl AppState {
    pub fn new(store: Store, journal_path: PathBuf, today: DayKey) -> Self {
        let mut app = Self {
            store,
            journal_path,
            current_day: today,
            focus: Pane::Tasks,
            task_index: 0,
            activity_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            notice: None,
            needs_save: false,
        };
        app.store.ensure_day(&today);
        app
    }

    /// Surface a failed load; the app keeps running on defaults
    pub fn report_load_error(&mut self, err: &StoreError) {
        if err.is_load_failure() {
            self.notify(NoticeKind::Error, format!("{} (started with an empty journal)", err));
        } else {
            self.notify(NoticeKind::Error, err.to_string());
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the notice once it has been visible for NOTICE_TTL
    pub fn expire_notice(&mut self, now: Instant) {
        if let Some(notice) = &self.notice {
            if now.duration_since(notice.shown_at) >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    // ---- day navigation ----

    pub fn go_to_day(&mut self, day: DayKey) {
        self.current_day = day;
        self.store.ensure_day(&day);
        self.task_index = 0;
        self.activity_index = 0;
    }

    pub fn prev_day(&mut self) {
        self.go_to_day(self.current_day.prev());
    }

    pub fn next_day(&mut self) {
        self.go_to_day(self.current_day.next());
    }

    pub fn go_to_today(&mut self) {
        self.go_to_day(DayKey::today());
    }

    // ---- focus & selection ----

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn selection_len(&self) -> usize {
        match self.focus {
            Pane::Tasks => self.store.tasks_for(&self.current_day).len(),
            Pane::Activities => self.store.activity_list.len(),
            Pane::Reading => 0,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.focus {
            Pane::Tasks => Some(&mut self.task_index),
            Pane::Activities => Some(&mut self.activity_index),
            Pane::Reading => None,
        }
    }

    pub fn move_selection_up(&mut self) {
        if let Some(index) = self.selection_mut() {
            *index = index.saturating_sub(1);
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.selection_len();
        if let Some(index) = self.selection_mut() {
            if *index + 1 < len {
                *index += 1;
            }
        }
    }

    /// Keep selections inside their lists after removals
    fn clamp_selection(&mut self) {
        let tasks = self.store.tasks_for(&self.current_day).len();
        let activities = self.store.activity_list.len();
        self.task_index = self.task_index.min(tasks.saturating_sub(1));
        self.activity_index = self.activity_index.min(activities.saturating_sub(1));
    }

    pub fn selected_task_id(&self) -> Option<String> {
        self.store
            .tasks_for(&self.current_day)
            .get(self.task_index)
            .map(|task| task.id.clone())
    }

    pub fn selected_activity(&self) -> Option<String> {
        self.store.activity_list.get(self.activity_index).cloned()
    }

    // ---- edits ----

    /// Toggle the selected task or activity
    pub fn toggle_selected(&mut self) {
        let day = self.current_day;
        match self.focus {
            Pane::Tasks => {
                if let Some(id) = self.selected_task_id() {
                    self.store.toggle_task(&day, &id);
                }
            }
            Pane::Activities => {
                if let Some(name) = self.selected_activity() {
                    self.store.toggle_activity(&day, &name);
                }
            }
            Pane::Reading => {}
        }
    }

    /// Remove the selected task or activity (structural, autosaved)
    pub fn remove_selected(&mut self) {
        let day = self.current_day;
        let removed = match self.focus {
            Pane::Tasks => self
                .selected_task_id()
                .map_or(false, |id| self.store.remove_task(&day, &id)),
            Pane::Activities => self
                .selected_activity()
                .map_or(false, |name| self.store.remove_activity(&name)),
            Pane::Reading => false,
        };

        if removed {
            self.needs_save = true;
            self.clamp_selection();
        }
    }

    pub fn increase_rating(&mut self) {
        let day = self.current_day;
        let next = self.store.rating_for(&day).increment();
        self.store.set_rating(&day, next.value() as i64);
    }

    pub fn decrease_rating(&mut self) {
        let day = self.current_day;
        let next = self.store.rating_for(&day).decrement();
        self.store.set_rating(&day, next.value() as i64);
    }

    /// Nudge the current day's page count, never below zero
    pub fn adjust_pages(&mut self, delta: i64) {
        let day = self.current_day;
        let pages = self.store.reading_for(&day).pages as i64;
        let updated = (pages + delta).clamp(0, u32::MAX as i64) as u32;
        self.store.set_reading_pages(&day, updated);
    }

    // ---- input form ----

    /// Open the add form matching the focused pane
    pub fn start_add(&mut self) {
        let mode = match self.focus {
            Pane::Tasks => UiMode::AddingTask,
            Pane::Activities => UiMode::AddingActivity,
            Pane::Reading => return,
        };
        self.open_form(mode, String::new());
    }

    pub fn start_edit_reading_title(&mut self) {
        let title = self.store.reading_for(&self.current_day).title.clone();
        self.open_form(UiMode::EditingReadingTitle, title);
    }

    pub fn start_edit_reading_pages(&mut self) {
        let pages = self.store.reading_for(&self.current_day).pages;
        self.open_form(UiMode::EditingReadingPages, pages.to_string());
    }

    fn open_form(&mut self, mode: UiMode, value: String) {
        self.input_form = Some(InputFormState { value });
        self.ui_mode = mode;
    }

    /// Add character to the input form (digits only for page counts)
    pub fn input_form_add_char(&mut self, c: char) {
        let digits_only = self.ui_mode == UiMode::EditingReadingPages;
        if let Some(form) = &mut self.input_form {
            if !digits_only || c.is_ascii_digit() {
                form.value.push(c);
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.value.pop();
        }
    }

    /// Apply the form to the store
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            return;
        };
        let day = self.current_day;

        match self.ui_mode {
            UiMode::AddingTask => {
                if self.store.add_task(&day, &form.value) {
                    self.task_index = self.store.tasks_for(&day).len() - 1;
                    self.needs_save = true;
                } else {
                    self.notify(NoticeKind::Error, "Task text cannot be empty");
                }
            }
            UiMode::AddingActivity => {
                if self.store.add_activity(&form.value) {
                    self.activity_index = self.store.activity_list.len() - 1;
                    self.needs_save = true;
                } else {
                    self.notify(NoticeKind::Error, "Activity name is empty or already exists");
                }
            }
            UiMode::EditingReadingTitle => {
                self.store.set_reading_title(&day, form.value.trim());
            }
            UiMode::EditingReadingPages => {
                let value = form.value.trim();
                if value.is_empty() {
                    self.store.set_reading_pages(&day, 0);
                } else {
                    match value.parse::<u32>() {
                        Ok(pages) => self.store.set_reading_pages(&day, pages),
                        Err(_) => self.notify(NoticeKind::Error, "Page count is too large"),
                    }
                }
            }
            UiMode::Normal => {}
        }

        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- saving ----

    /// Manual save; reports the outcome in the status line
    pub fn save(&mut self) -> bool {
        match save_store(&self.journal_path, &self.store) {
            Ok(()) => {
                self.needs_save = false;
                self.notify(NoticeKind::Success, "Journal saved");
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "manual save failed");
                self.notify(NoticeKind::Error, err.to_string());
                false
            }
        }
    }

    /// Save after a structural edit; only failures are shown
    ///
    /// Returns the outcome of this flush alone, `Ok` when nothing was pending.
    pub fn flush_autosave(&mut self) -> Result<(), StoreError> {
        if !self.needs_save {
            return Ok(());
        }
        self.needs_save = false;

        save_store(&self.journal_path, &self.store).map_err(|err| {
            tracing::error!(error = %err, "autosave failed");
            self.notify(NoticeKind::Error, format!("{} (press s to retry)", err));
            err
        })
    }

    // ---- charts ----

    /// Ratings of the week ending at the current day
    pub fn rating_points(&self) -> Vec<RatingPoint> {
        rating_window(&self.store, self.current_day, DEFAULT_WINDOW_DAYS)
    }

    /// Checked-activity counts of the week ending at the current day
    pub fn activity_points(&self) -> Vec<ActivityPoint> {
        activity_window(&self.store, self.current_day, DEFAULT_WINDOW_DAYS)
    }
}
