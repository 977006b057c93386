use super::args::{BackendCommand, Cli, Commands};
use super::handlers;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;
use taskdeck_runtime::{Config, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let renderer = ConsoleRenderer::new(cli.format);

    let Some(command) = cli.command else {
        let config_path = Config::path_in(&data_dir);
        renderer.render_guidance(config_path.exists())?;
        return Ok(());
    };

    // One operation per invocation; a current-thread runtime is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::Init => handlers::init::handle(&data_dir, &renderer),

        Commands::List { filter } => {
            runtime.block_on(handlers::list::handle(&data_dir, &renderer, filter.into()))
        }

        Commands::Add {
            name,
            description,
            priority,
            due,
        } => runtime.block_on(handlers::add::handle(
            &data_dir,
            &renderer,
            name,
            description,
            priority.into(),
            due,
        )),

        Commands::Toggle { id } => {
            runtime.block_on(handlers::toggle::handle(&data_dir, &renderer, id))
        }

        Commands::Delete { id, yes } => {
            runtime.block_on(handlers::delete::handle(&data_dir, &renderer, id, yes))
        }

        Commands::Backend { command } => match command {
            BackendCommand::Show => handlers::backend::show(&data_dir, &renderer),
            BackendCommand::Use { mode, base_url } => {
                handlers::backend::set(&data_dir, &renderer, mode.into(), base_url)
            }
        },
    }
}
