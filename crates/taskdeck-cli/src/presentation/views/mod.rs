mod task;

pub use task::{BackendView, TaskListView};
