use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use crate::task::TaskId;
use crate::task_list::TaskList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Text,
    DueDate,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Text => Focus::DueDate,
            Focus::DueDate => Focus::List,
            Focus::List => Focus::Text,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Text => Focus::List,
            Focus::DueDate => Focus::Text,
            Focus::List => Focus::DueDate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct App {
    pub tasks: TaskList,
    pub focus: Focus,
    pub selected: usize,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.tasks.tasks().get(self.selected).map(|t| t.id())
    }

    /// Applies one key press. `today` is only used to word the status line.
    pub fn handle_key(&mut self, key: KeyEvent, today: NaiveDate) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        trace!(code = ?key.code, focus = ?self.focus, "key");
        self.status = None;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        // Ctrl/Alt chords are not text and not list commands.
        let plain = key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT;

        match self.focus {
            Focus::Text => match key.code {
                KeyCode::Enter => self.submit(today),
                KeyCode::Backspace => self.tasks.pop_pending_text(),
                KeyCode::Char(c) if plain => self.tasks.push_pending_text(c),
                _ => {}
            },
            Focus::DueDate => match key.code {
                KeyCode::Enter => self.submit(today),
                KeyCode::Backspace => self.tasks.pop_pending_due_date(),
                KeyCode::Char(c) if plain => {
                    self.tasks.push_pending_due_date(c);
                }
                _ => {}
            },
            Focus::List => match key.code {
                KeyCode::Char('q') if plain => self.should_quit = true,
                KeyCode::Up => self.select_prev(),
                KeyCode::Down => self.select_next(),
                KeyCode::Char('k') if plain => self.select_prev(),
                KeyCode::Char('j') if plain => self.select_next(),
                KeyCode::Char(' ') | KeyCode::Char('x') if plain => self.toggle_selected(),
                KeyCode::Delete => self.delete_selected(),
                KeyCode::Char('d') if plain => self.delete_selected(),
                _ => {}
            },
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    fn submit(&mut self, today: NaiveDate) {
        match self.tasks.submit() {
            Ok(Some(id)) => {
                self.selected = self.tasks.len() - 1;
                let overdue = self.tasks.get(id).is_some_and(|t| t.is_overdue_at(today));
                self.status = Some(if overdue {
                    Status::info("Added (already overdue)")
                } else {
                    Status::info("Added")
                });
            }
            Ok(None) => {}
            Err(err) => self.status = Some(Status::error(err.to_string())),
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.tasks.toggle(id) {
            let done = self.tasks.get(id).is_some_and(|t| t.is_completed());
            self.status = Some(Status::info(if done {
                "Marked complete"
            } else {
                "Marked incomplete"
            }));
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.tasks.delete(id) {
            self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
            self.status = Some(Status::info("Deleted"));
        }
    }
}
