// src/bin/collicheck.rs
use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use collicheck_core::cli::{self, CheckArgs, Cli, Commands};
use collicheck_core::exit::CheckExit;

fn main() {
    let cli = Cli::parse();
    init_logging(verbose(&cli));
    match run(&cli) {
        Ok(exit) => exit.exit(),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(CheckExit::Error.code());
        }
    }
}

fn verbose(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Check { options, .. } | Commands::Exceptions { options }) => options.verbose,
        _ => cli.options.verbose,
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<CheckExit> {
    match &cli.command {
        Some(Commands::Check { input, options }) => cli::handle_check(input, options),
        Some(Commands::Init { force }) => cli::handle_init(*force),
        Some(Commands::Exceptions { options }) => cli::handle_exceptions(options),
        None => run_default(cli.input.as_deref(), &cli.options),
    }
}

fn run_default(input: Option<&std::path::Path>, options: &CheckArgs) -> Result<CheckExit> {
    if let Some(input) = input {
        return cli::handle_check(input, options);
    }
    Cli::command().print_help()?;
    Ok(CheckExit::InvalidInput)
}
