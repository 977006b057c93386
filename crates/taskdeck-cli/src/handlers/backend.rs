use crate::presentation::presenters::present_backend;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;
use std::path::Path;
use taskdeck_runtime::Config;
use taskdeck_store::BackendMode;

pub fn show(data_dir: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    let config_path = Config::path_in(data_dir);
    let config = Config::load_from(&config_path)?;

    let view_model = present_backend(&config, data_dir);
    renderer.render_backend(&view_model)
}

pub fn set(
    data_dir: &Path,
    renderer: &ConsoleRenderer,
    mode: BackendMode,
    base_url: Option<String>,
) -> Result<()> {
    let config_path = Config::path_in(data_dir);
    let mut config = Config::load_from(&config_path)?;

    config.backend.mode = mode;
    if let Some(url) = base_url {
        config.backend.remote.base_url = url;
    }
    config.save_to(&config_path)?;

    renderer.render_message(&format!("Backend set to '{}'", mode))?;
    Ok(())
}
