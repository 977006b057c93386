use super::{note_unavailable, session};
use crate::presentation::presenters::present_task_list;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;
use std::path::Path;
use taskdeck_runtime::TaskList;
use taskdeck_types::StatusFilter;

pub async fn handle(
    data_dir: &Path,
    renderer: &ConsoleRenderer,
    filter: StatusFilter,
) -> Result<()> {
    let (config, sync) = session(data_dir)?;
    let mut list = TaskList::new();
    list.set_filter(filter);

    if !note_unavailable(sync.refresh(&mut list).await, renderer)? {
        return Ok(());
    }

    let view_model = present_task_list(list.tasks(), list.filter(), config.backend.mode);
    renderer.render_task_list(&view_model)
}
