//! Task record and partial updates.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::ids::TaskId;
use super::principal::Principal;
use super::priority::Priority;

/// A task as the client works with it: store-assigned id plus document body.
///
/// Design: the store keys documents by id, so the id lives outside the
/// document body; `Task` is the joined view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,

    /// Set once at creation, never mutated. Queries scope on this field;
    /// the store enforces nothing, so the equality filter is the only
    /// access control there is.
    pub owner_email: Principal,
}

impl Task {
    /// Join a store document with its id.
    pub fn from_document(id: TaskId, document: Value) -> Result<Self, serde_json::Error> {
        let body: NewTask = serde_json::from_value(document)?;
        Ok(Self {
            id,
            title: body.title,
            description: body.description,
            priority: body.priority,
            completed: body.completed,
            owner_email: body.owner_email,
        })
    }
}

/// Create input: a task before the store has assigned an id.
///
/// Doubles as the document-body schema on reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    pub owner_email: Principal,
}

impl NewTask {
    /// A fresh task; `completed` always starts false.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        owner_email: Principal,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            completed: false,
            owner_email,
        }
    }
}

/// The two legal partial updates for a task document.
///
/// Content edits and completion toggles never travel together, and a patch
/// never touches `ownerEmail`; the enum makes the illegal mixes
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPatch {
    /// Edit path: title / description / priority together.
    Content {
        title: String,
        description: String,
        priority: Priority,
    },

    /// Toggle path: the completion flag alone.
    Completion(bool),
}

impl TaskPatch {
    /// Render as the partial document sent to the store.
    pub fn into_fields(self) -> Value {
        match self {
            TaskPatch::Content {
                title,
                description,
                priority,
            } => json!({
                "title": title,
                "description": description,
                "priority": priority,
            }),
            TaskPatch::Completion(completed) => json!({ "completed": completed }),
        }
    }
}
