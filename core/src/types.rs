//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client does not pull in axum. Integration tests catch any schema drift
//! between the two crates.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item, as sent on creation and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
}

/// A successful creation: the stored todo and the `Location` header, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub location: Option<String>,
    pub todo: Todo,
}

/// Body of a 400 response to a rejected creation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ValidationProblem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    pub errors: BTreeMap<String, Vec<String>>,
}
