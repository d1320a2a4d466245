mod classify;
mod cli;
mod error;
mod probe;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            base_url,
            path,
            param,
            seed,
            live,
            json,
            init,
            verbose,
        } => probe::execute(probe::RunArgs {
            config_path: config,
            base_url,
            path,
            params: param,
            seed,
            live,
            json,
            init,
            verbose,
        }),
        Commands::Classify { status, body } => classify::execute(status, body),
    };

    match result {
        Ok(success) => {
            if !success {
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("{} {}", "Error:".bold().red(), err.user_message());
            process::exit(1);
        }
    }
}
