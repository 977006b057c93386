mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Manage a task list backed by a remote service or a local store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to the platform data dir, then ~/.taskdeck)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
