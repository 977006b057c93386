use taskdeck_types::{StatusFilter, Task, TaskId};

/// Authoritative in-memory copy of the active backend's list, plus the
/// process-wide display filter.
///
/// The list is only ever replaced wholesale with backend results, never
/// patched in place; that keeps it a replica of backend state after every
/// successful mutation. Owned by the application root and passed by
/// reference to whoever needs it.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    filter: StatusFilter,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
