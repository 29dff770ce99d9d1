//! TaskRepository - typed facade over the document store.
//!
//! Translates domain operations (create / read / update / delete task) into
//! `DocumentStore` calls against the `"tasks"` collection. No caching, no
//! batching, no multi-document transactions; callers re-read to observe the
//! effect of a write.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::{NewTask, Principal, StoreError, Task, TaskId, TaskPatch};
use crate::ports::DocumentStore;

/// Collection that holds all task documents.
pub const TASKS_COLLECTION: &str = "tasks";

/// Field that scopes every read to its owner.
pub const OWNER_FIELD: &str = "ownerEmail";

/// TaskRepository は DocumentStore 上の型付きファサード
pub struct TaskRepository {
    store: Arc<dyn DocumentStore>,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Insert a new task document; the store assigns the id.
    pub async fn create(&self, task: NewTask) -> Result<TaskId, StoreError> {
        let document =
            serde_json::to_value(&task).map_err(|e| StoreError::Decode(e.to_string()))?;
        let id = self.store.insert(TASKS_COLLECTION, document).await?;
        Ok(TaskId::new(id))
    }

    /// All tasks belonging to `owner`, in store-returned order.
    ///
    /// A failed query is logged and swallowed to an empty list so a transient
    /// outage degrades the board instead of wedging it. Documents that fail
    /// to decode are skipped, likewise with a warning.
    pub async fn read_all_for_owner(&self, owner: &Principal) -> Vec<Task> {
        let rows = match self
            .store
            .query_eq(TASKS_COLLECTION, OWNER_FIELD, json!(owner))
            .await
        {
            Ok(rows) => rows,
            Err(error) => {
                warn!(%owner, %error, "task query failed; showing an empty list");
                return Vec::new();
            }
        };

        let mut tasks = Vec::with_capacity(rows.len());
        for (id, document) in rows {
            match Task::from_document(TaskId::new(id), document) {
                Ok(task) => tasks.push(task),
                Err(error) => warn!(%owner, %error, "skipping undecodable task document"),
            }
        }
        tasks
    }

    /// Apply a partial update. The store does not return the new document;
    /// callers re-read to observe it.
    pub async fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<(), StoreError> {
        self.store
            .update_fields(TASKS_COLLECTION, id.as_str(), patch.into_fields())
            .await
    }

    /// Hard delete; there is no recovery path.
    pub async fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        self.store.remove(TASKS_COLLECTION, id.as_str()).await
    }
}
