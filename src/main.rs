mod cli;
mod error;
mod logging;
mod lookup;
mod ui;

use clap::Parser;
use cli::Cli;
use error::CliError;
use std::process;

fn run(cli: &Cli) -> error::Result<()> {
    let output = lookup::execute(cli)?;
    ui::print_records(&output).map_err(|e| CliError::Io(e).with_context("Failed to write output"))
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing_subscriber(cli.verbose);

    if cli.plain {
        ui::disable_colors();
    }

    if let Err(err) = run(&cli) {
        if err.is_not_found() {
            ui::not_found_message(&err.user_message());
        } else {
            ui::error_message(&err.user_message());
        }
        process::exit(1);
    }
}
