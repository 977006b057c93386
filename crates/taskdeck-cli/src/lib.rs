mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{BackendCommand, Cli, Commands, OutputFormat};
pub use commands::run;
