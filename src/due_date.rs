use chrono::{Datelike, NaiveDate};

use crate::error::InputError;

pub const INPUT_FORMAT: &str = "%Y-%m-%d";
pub const MAX_INPUT_LEN: usize = 10;

/// Parses the due date field. Blank means no due date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, INPUT_FORMAT)
        .map(Some)
        .map_err(|_| InputError::InvalidDueDate(input.to_string()))
}

/// Short date in the display locale: year/month/day, no zero padding.
pub fn format_due_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

pub fn accepts_input_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}
