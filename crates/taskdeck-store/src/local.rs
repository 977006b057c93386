use crate::traits::TaskStore;
use crate::{Error, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use taskdeck_types::{Priority, Task, TaskDraft, TaskId};

/// Durable store backed by a single JSON file holding the full array.
///
/// Every operation reads the file wholesale and mutations write it back
/// wholesale, mirroring how the remote service owns its collection. On first
/// use (no file on disk yet) the store seeds itself with two demonstration
/// records so the list is not empty out of the box; a file holding an empty
/// array stays empty.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_or_seed(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            let seeded = seed_tasks();
            self.persist(&seeded).await?;
            return Ok(seeded);
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn persist(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(tasks)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Ids derive from creation time in milliseconds; the max-id guard keeps
    /// them unique when two creations land in the same millisecond.
    fn next_id(tasks: &[Task]) -> TaskId {
        let now = Utc::now().timestamp_millis();
        let max_existing = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        now.max(max_existing + 1)
    }
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            name: "Point taskdeck at your backend".to_string(),
            description: "Run 'taskdeck backend use remote --base-url <url>' to leave demo mode"
                .to_string(),
            priority: Priority::High,
            due_date: Some("2023-12-01".to_string()),
            completed: false,
        },
        Task {
            id: 2,
            name: "Browse the demo data".to_string(),
            description: "These records were seeded on first use and live in the local store file"
                .to_string(),
            priority: Priority::Medium,
            due_date: Some("2023-11-20".to_string()),
            completed: true,
        },
    ]
}

#[async_trait]
impl TaskStore for LocalStore {
    async fn fetch_all(&self) -> Result<Vec<Task>> {
        self.load_or_seed().await
    }

    async fn create(&self, draft: TaskDraft) -> Result<()> {
        let mut tasks = self.load_or_seed().await?;
        let id = Self::next_id(&tasks);
        tasks.push(draft.into_task(id));
        self.persist(&tasks).await
    }

    async fn update(&self, id: TaskId, task: Task) -> Result<()> {
        let mut tasks = self.load_or_seed().await?;
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound(id))?;
        *slot = task;
        self.persist(&tasks).await
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        let mut tasks = self.load_or_seed().await?;
        tasks.retain(|t| t.id != id);
        self.persist(&tasks).await
    }
}
