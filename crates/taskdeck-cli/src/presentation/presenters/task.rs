use crate::presentation::view_models::{BackendViewModel, TaskCardViewModel, TaskListViewModel};
use std::path::Path;
use taskdeck_runtime::Config;
use taskdeck_store::BackendMode;
use taskdeck_types::{StatusFilter, Task};

/// Project the in-memory list through the active filter. Source order is
/// preserved; filtering never reorders.
pub fn present_task_list(
    tasks: &[Task],
    filter: StatusFilter,
    backend: BackendMode,
) -> TaskListViewModel {
    let cards: Vec<TaskCardViewModel> = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(present_card)
        .collect();

    TaskListViewModel {
        backend: backend.to_string(),
        filter: filter.label().to_string(),
        total: cards.len(),
        cards,
    }
}

fn present_card(task: &Task) -> TaskCardViewModel {
    TaskCardViewModel {
        id: task.id,
        name: task.name.clone(),
        description: task.description.clone(),
        priority: task.priority.label().to_string(),
        due_date: task.due_date.clone(),
        completed: task.completed,
    }
}

pub fn present_backend(config: &Config, data_dir: &Path) -> BackendViewModel {
    BackendViewModel {
        mode: config.backend.mode.to_string(),
        base_url: config.backend.remote.base_url.clone(),
        store_path: config.store_path(data_dir).display().to_string(),
    }
}
