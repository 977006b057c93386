use crate::confirm::DeleteConfirmation;
use crate::task_list::TaskList;
use crate::Result;
use taskdeck_store::TaskStore;
use taskdeck_types::{TaskDraft, TaskId};

/// Bridges user intents to the active backend and keeps the in-memory list
/// a replica of backend truth: every successful mutation is followed by a
/// full re-fetch rather than a local patch. The extra round trip per
/// mutation is the price of never showing a state the backend disagrees
/// with.
///
/// Concurrent operations are not sequenced or de-duplicated; a
/// later-completing refresh wins. Accepted, since one controller serves one
/// cooperative flow.
pub struct SyncController {
    store: Box<dyn TaskStore>,
}

impl SyncController {
    pub fn new(store: Box<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Replace the whole in-memory list with the backend's current state.
    pub async fn refresh(&self, list: &mut TaskList) -> Result<()> {
        let tasks = self.store.fetch_all().await?;
        list.replace(tasks);
        Ok(())
    }

    /// Persist a new record, then refresh.
    pub async fn submit_create(&self, list: &mut TaskList, draft: TaskDraft) -> Result<()> {
        self.store.create(draft).await?;
        self.refresh(list).await
    }

    /// Invert the completion flag of the record with the given id.
    ///
    /// An id that is no longer in the list is silently ignored: the record
    /// was removed under us and there is nothing sensible to toggle.
    pub async fn toggle_completion(&self, list: &mut TaskList, id: TaskId) -> Result<()> {
        let Some(task) = list.get(id) else {
            return Ok(());
        };

        let updated = task.with_completion_toggled();
        self.store.update(id, updated).await?;
        self.refresh(list).await
    }

    /// Execute a confirmed deletion. The pending-confirmation state is
    /// closed whether or not the backend call succeeds; with nothing
    /// pending this is a no-op.
    pub async fn confirm_delete(
        &self,
        list: &mut TaskList,
        confirmation: &mut DeleteConfirmation,
    ) -> Result<()> {
        let Some(id) = confirmation.pending() else {
            return Ok(());
        };

        let outcome = self.store.delete(id).await;
        confirmation.clear();
        outcome?;
        self.refresh(list).await
    }
}
