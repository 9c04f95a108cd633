use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&cli.style, &cli.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            handlers::interactive::handle(stdin.lock(), prompt, &config, &mut out)?;
        }

        Commands::Render {
            input,
            input_format,
        } => handlers::render::handle(&input, input_format, &config, &mut out)?,

        Commands::Export {
            input,
            input_format,
        } => handlers::export::handle(&input, input_format, &config, &mut out)?,

        Commands::Import {
            mapping,
            method,
            index,
            base,
            input_format,
        } => handlers::import::handle(
            handlers::import::ImportArgs {
                mapping: &mapping,
                method: &method,
                index,
                base: base.as_deref(),
                input_format,
            },
            &config,
            &mut out,
        )?,
    }

    out.flush()?;
    Ok(())
}
