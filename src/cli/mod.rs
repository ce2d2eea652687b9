pub mod commands;
pub mod logging;
pub mod types;

use std::process::ExitCode;

use clap::Parser;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug, cli.quiet);
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        types::Commands::Generate {
            paths,
            config,
            container,
            in_place,
            output,
        } => commands::handle_generate_command(
            paths,
            config,
            container.as_deref(),
            *in_place,
            output.as_ref(),
        ),
        types::Commands::Headings {
            paths,
            config,
            format,
        } => commands::handle_headings_command(paths, config, *format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
