use crate::args::OutputFormat;
use crate::presentation::view_models::{BackendViewModel, TaskListViewModel};
use crate::presentation::views::{BackendView, TaskListView};
use anyhow::Result;
use owo_colors::OwoColorize;

/// Output driver: text goes through the views, `--format json` dumps the
/// view model. Warnings go to stderr in both modes so JSON stdout stays
/// machine-readable.
pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render_task_list(&self, view_model: &TaskListViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view_model)?),
            OutputFormat::Plain => print!("{}", TaskListView::new(view_model)),
        }
        Ok(())
    }

    pub fn render_backend(&self, view_model: &BackendViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view_model)?),
            OutputFormat::Plain => println!("{}", BackendView::new(view_model)),
        }
        Ok(())
    }

    pub fn render_message(&self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::json!({ "message": message })),
            OutputFormat::Plain => println!("{}", message),
        }
        Ok(())
    }

    pub fn render_warning(&self, message: &str) -> Result<()> {
        eprintln!("{}", message.yellow());
        Ok(())
    }

    pub fn render_guidance(&self, config_exists: bool) -> Result<()> {
        println!("taskdeck - task list manager\n");

        if !config_exists {
            println!("Get started:");
            println!("  taskdeck init\n");
            println!("The init command will:");
            println!("  1. Create the data directory");
            println!("  2. Write a default configuration (local backend)\n");
        } else {
            println!("Quick commands:");
            println!("  taskdeck list                     # View your tasks");
            println!("  taskdeck add <name>               # Add a task");
            println!("  taskdeck toggle <id>              # Flip completion");
            println!("  taskdeck delete <id>              # Delete after confirmation");
            println!("  taskdeck backend show             # Inspect the active backend\n");
        }

        println!("For more commands:");
        println!("  taskdeck --help");
        Ok(())
    }
}
