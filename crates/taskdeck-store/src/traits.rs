use crate::Result;
use async_trait::async_trait;
use taskdeck_types::{Task, TaskDraft, TaskId};

/// Storage contract shared by the remote and local backends.
///
/// Responsibilities:
/// - Return the full current set on fetch, in backend order
/// - Apply a single mutation and make it durable before returning
/// - Fail without side effects: an error means the backend is unchanged as
///   far as the caller can tell
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Full current set of records.
    async fn fetch_all(&self) -> Result<Vec<Task>>;

    /// Persist a new record; the backend assigns the id.
    async fn create(&self, draft: TaskDraft) -> Result<()>;

    /// Replace the record with the given id wholesale. Partial patches are
    /// not part of the contract.
    async fn update(&self, id: TaskId, task: Task) -> Result<()>;

    /// Remove the record with the given id.
    async fn delete(&self, id: TaskId) -> Result<()>;
}
