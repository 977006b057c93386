pub mod add;
pub mod backend;
pub mod delete;
pub mod init;
pub mod list;
pub mod toggle;

use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;
use std::path::Path;
use taskdeck_runtime::{Config, SyncController};

const UNREACHABLE_NOTICE: &str = "Cannot reach the remote backend. Check that the service is \
     running, or switch with 'taskdeck backend use local'.";

/// Load configuration and stand up the controller for one operation.
pub(crate) fn session(data_dir: &Path) -> Result<(Config, SyncController)> {
    let config_path = Config::path_in(data_dir);
    let config = Config::load_from(&config_path)?;
    let store = config.create_store(data_dir);
    Ok((config, SyncController::new(store)))
}

/// Turn an unreachable backend into a single warning instead of an error.
/// Returns false when the operation did not go through; anything else
/// propagates.
pub(crate) fn note_unavailable(
    result: taskdeck_runtime::Result<()>,
    renderer: &ConsoleRenderer,
) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err) if err.as_unavailable().is_some() => {
            renderer.render_warning(UNREACHABLE_NOTICE)?;
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}
