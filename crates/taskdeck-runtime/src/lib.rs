//! Orchestration layer: configuration, the authoritative in-memory list,
//! and the controller that keeps it synchronized with the active backend.

mod config;
mod confirm;
mod error;
mod sync;
mod task_list;

pub use config::{BackendConfig, Config, LocalConfig, RemoteConfig, resolve_data_dir};
pub use confirm::DeleteConfirmation;
pub use error::{Error, Result};
pub use sync::SyncController;
pub use task_list::TaskList;
