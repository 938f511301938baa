use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid due date `{0}`, expected YYYY-MM-DD")]
    InvalidDueDate(String),
}
