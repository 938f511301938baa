pub mod app;
pub mod cli;
pub mod due_date;
pub mod error;
pub mod task;
pub mod task_list;
pub mod ui;

pub use app::{App, Focus};
pub use error::InputError;
pub use task::{overdue, Task, TaskId};
pub use task_list::{Stats, TaskList};
