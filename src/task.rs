use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry. Records are replaced, never edited, so the fields
/// stay private behind getters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    due_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>, due_date: Option<NaiveDate>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            due_date,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Same record with the completed flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Local::now().date_naive())
    }

    /// A due date of `today` is not overdue yet; only strictly earlier days are.
    pub fn is_overdue_at(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => !self.completed && due < today,
            None => false,
        }
    }
}

/// Due dates are local midnights, so comparing against midnight of `now`
/// only needs the calendar date.
pub fn overdue(task: &Task, now: NaiveDateTime) -> bool {
    task.is_overdue_at(now.date())
}
