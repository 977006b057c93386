use super::{note_unavailable, session};
use crate::presentation::presenters::present_task_list;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;
use std::path::Path;
use taskdeck_runtime::TaskList;
use taskdeck_types::{Priority, TaskDraft};

pub async fn handle(
    data_dir: &Path,
    renderer: &ConsoleRenderer,
    name: String,
    description: String,
    priority: Priority,
    due: Option<String>,
) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("task name must not be empty");
    }

    let (config, sync) = session(data_dir)?;
    let mut list = TaskList::new();

    let draft = TaskDraft {
        name,
        description,
        priority,
        due_date: due,
        completed: false,
    };

    if !note_unavailable(sync.submit_create(&mut list, draft).await, renderer)? {
        return Ok(());
    }

    let view_model = present_task_list(list.tasks(), list.filter(), config.backend.mode);
    renderer.render_task_list(&view_model)
}
