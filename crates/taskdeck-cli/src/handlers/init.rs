use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;
use std::path::Path;
use taskdeck_runtime::Config;

pub fn handle(data_dir: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let config_path = Config::path_in(data_dir);
    if config_path.exists() {
        renderer.render_message(&format!(
            "Configuration already exists at {}",
            config_path.display()
        ))?;
        return Ok(());
    }

    let config = Config::default();
    config.save_to(&config_path)?;

    renderer.render_message(&format!(
        "Wrote default configuration to {}",
        config_path.display()
    ))?;
    renderer.render_message(&format!(
        "Backend mode: {} (switch with 'taskdeck backend use')",
        config.backend.mode
    ))?;
    Ok(())
}
