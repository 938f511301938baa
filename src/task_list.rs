use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::due_date::{self, parse_due_date};
use crate::error::InputError;
use crate::task::{Task, TaskId};

/// Hands out task ids from a counter, so two adds in the same instant never
/// collide. Ids are not reused after a delete.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub completed: usize,
    pub total: usize,
}

impl Stats {
    pub fn is_visible(&self) -> bool {
        self.total > 0
    }
}

/// The task collection plus the two input fields that have not been
/// committed yet.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    pending_text: String,
    pending_due_date: String,
    ids: IdGenerator,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    pub fn pending_due_date(&self) -> &str {
        &self.pending_due_date
    }

    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    pub fn set_pending_due_date(&mut self, date: impl Into<String>) {
        self.pending_due_date = date.into();
    }

    pub fn push_pending_text(&mut self, c: char) {
        self.pending_text.push(c);
    }

    pub fn pop_pending_text(&mut self) {
        self.pending_text.pop();
    }

    /// Returns false when the character is not allowed in a date or the
    /// field is already full.
    pub fn push_pending_due_date(&mut self, c: char) -> bool {
        if !due_date::accepts_input_char(c) || self.pending_due_date.len() >= due_date::MAX_INPUT_LEN
        {
            return false;
        }
        self.pending_due_date.push(c);
        true
    }

    pub fn pop_pending_due_date(&mut self) {
        self.pending_due_date.pop();
    }

    /// Commits the pending fields as a new task.
    pub fn submit(&mut self) -> Result<Option<TaskId>, InputError> {
        let text = self.pending_text.clone();
        let due_date = self.pending_due_date.clone();
        self.add(&text, &due_date)
    }

    /// Appends a task unless `text` is blank, in which case nothing changes
    /// and `Ok(None)` is returned. Pending fields are cleared on success.
    pub fn add(&mut self, text: &str, due_date: &str) -> Result<Option<TaskId>, InputError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring add with blank text");
            return Ok(None);
        }

        let due_date = parse_due_date(due_date).inspect_err(|err| warn!("{err}"))?;
        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text, due_date));
        self.pending_text.clear();
        self.pending_due_date.clear();

        info!(%id, ?due_date, "task added");
        Ok(Some(id))
    }

    /// Flips the completed flag of the task with `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id() == id) {
            Some(index) => {
                let toggled = self.tasks[index].toggled();
                info!(%id, completed = toggled.is_completed(), "task toggled");
                self.tasks[index] = toggled;
                true
            }
            None => {
                debug!(%id, "toggle on unknown task ignored");
                false
            }
        }
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        let removed = self.tasks.len() != before;
        if removed {
            info!(%id, "task deleted");
        } else {
            debug!(%id, "delete on unknown task ignored");
        }
        removed
    }

    pub fn stats(&self) -> Stats {
        Stats {
            completed: self.tasks.iter().filter(|t| t.is_completed()).count(),
            total: self.tasks.len(),
        }
    }

    pub fn overdue_count_at(&self, today: NaiveDate) -> usize {
        self.tasks.iter().filter(|t| t.is_overdue_at(today)).count()
    }
}
