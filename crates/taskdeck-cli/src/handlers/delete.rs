use super::{note_unavailable, session};
use crate::presentation::presenters::present_task_list;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use taskdeck_runtime::{DeleteConfirmation, TaskList};
use taskdeck_types::TaskId;

pub async fn handle(
    data_dir: &Path,
    renderer: &ConsoleRenderer,
    id: TaskId,
    yes: bool,
) -> Result<()> {
    let (config, sync) = session(data_dir)?;
    let mut list = TaskList::new();

    let mut confirmation = DeleteConfirmation::new();
    confirmation.request(id);

    if !yes && !confirm_deletion(id)? {
        confirmation.cancel();
        renderer.render_message("Deletion cancelled.")?;
        return Ok(());
    }

    if !note_unavailable(
        sync.confirm_delete(&mut list, &mut confirmation).await,
        renderer,
    )? {
        return Ok(());
    }

    let view_model = present_task_list(list.tasks(), list.filter(), config.backend.mode);
    renderer.render_task_list(&view_model)
}

fn confirm_deletion(id: TaskId) -> Result<bool> {
    print!("Delete task {}? [y/N]: ", id);
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input).ok();
    let normalized = input.trim().to_lowercase();
    Ok(normalized == "y" || normalized == "yes")
}
