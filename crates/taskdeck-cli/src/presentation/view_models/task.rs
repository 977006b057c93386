use serde::Serialize;
use taskdeck_types::TaskId;

/// Snapshot of the filtered list handed to the renderer. Serialized
/// verbatim for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskListViewModel {
    /// Active backend mode label ("local" or "remote").
    pub backend: String,
    /// Active filter label ("all", "pending", "completed").
    pub filter: String,
    /// Count of cards after filtering.
    pub total: usize,
    pub cards: Vec<TaskCardViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskCardViewModel {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    /// Canonical priority label: "High", "Medium" or "Low".
    pub priority: String,
    /// Wire-format date (`YYYY-MM-DD`), left raw; the view formats it.
    pub due_date: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackendViewModel {
    pub mode: String,
    pub base_url: String,
    pub store_path: String,
}
