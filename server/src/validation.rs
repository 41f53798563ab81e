//! Checks run on a todo before it is created.
//!
//! Every rule runs; failures are collected per field so a caller can report
//! them all in one response.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::model::Todo;

pub const DUE_DATE_FIELD: &str = "dueDate";
pub const IS_COMPLETED_FIELD: &str = "isCompleted";

/// Field name (as it appears in JSON) to the messages raised against it.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// Validate `todo` as of `now`. A due date equal to `now` is accepted.
pub fn validate_new_todo(todo: &Todo, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if todo.due_date < now {
        errors
            .entry(DUE_DATE_FIELD.to_string())
            .or_default()
            .push("Cannot have duedate in the past".to_string());
    }
    if todo.is_completed {
        errors
            .entry(IS_COMPLETED_FIELD.to_string())
            .or_default()
            .push("Cannot Add completed todo".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
