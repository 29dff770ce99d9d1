//! Domain identifiers (strongly-typed IDs).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task document.
///
/// Assigned by the document store at insert and never reassigned. The value
/// is opaque to the client; no ordering or structure is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
