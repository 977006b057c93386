use super::enums::{BackendArg, FilterArg, PriorityArg};
use clap::Subcommand;
use taskdeck_types::TaskId;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the data directory and a default configuration")]
    Init,

    #[command(about = "Fetch the current list from the active backend and render it")]
    List {
        #[arg(long, default_value = "all")]
        filter: FilterArg,
    },

    #[command(about = "Add a task and show the refreshed list")]
    Add {
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "low")]
        priority: PriorityArg,

        #[arg(long, help = "Due date as YYYY-MM-DD")]
        due: Option<String>,
    },

    #[command(about = "Flip a task between pending and completed")]
    Toggle { id: TaskId },

    #[command(about = "Delete a task after confirmation")]
    Delete {
        id: TaskId,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Inspect or switch the configured backend")]
    Backend {
        #[command(subcommand)]
        command: BackendCommand,
    },
}

#[derive(Subcommand)]
pub enum BackendCommand {
    #[command(about = "Show the active backend configuration")]
    Show,

    #[command(about = "Select which backend to use")]
    Use {
        mode: BackendArg,

        #[arg(long, help = "Base URL of the remote service")]
        base_url: Option<String>,
    },
}
