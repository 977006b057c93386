//! Domain schemas shared by every taskdeck crate: the task record and its
//! draft form, the priority scale, and the display filter.
//!
//! Field names on the wire are fixed by the remote service's REST contract
//! and are mapped to Rust-side names via serde renames.

mod task;

pub use task::{Priority, StatusFilter, Task, TaskDraft, TaskId};
