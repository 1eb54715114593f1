/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Activities,
    Reading,
    Tasks,
}

impl Pane {
    /// Focus order used by Tab
    pub fn next(&self) -> Self {
        match self {
            Self::Activities => Self::Reading,
            Self::Reading => Self::Tasks,
            Self::Tasks => Self::Activities,
        }
    }

    /// Reverse focus order used by Shift+Tab
    pub fn prev(&self) -> Self {
        match self {
            Self::Activities => Self::Tasks,
            Self::Reading => Self::Activities,
            Self::Tasks => Self::Reading,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    AddingActivity,
    EditingReadingTitle,
    EditingReadingPages,
}

impl UiMode {
    /// Whether an input form is open
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Severity of a status-line notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_cycle() {
        let start = Pane::Activities;
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.prev(), Pane::Tasks);
        assert_eq!(Pane::Reading.prev().next(), Pane::Reading);
    }

    #[test]
    fn test_is_editing() {
        assert!(!UiMode::Normal.is_editing());
        assert!(UiMode::AddingTask.is_editing());
        assert!(UiMode::EditingReadingPages.is_editing());
    }
}
