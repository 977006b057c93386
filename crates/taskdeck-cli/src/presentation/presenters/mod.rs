mod task;

pub use task::{present_backend, present_task_list};
