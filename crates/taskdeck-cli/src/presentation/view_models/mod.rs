mod task;

pub use task::{BackendViewModel, TaskCardViewModel, TaskListViewModel};
