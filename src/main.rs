//! depfold - dependency layout folding
//!
//! Copies the public headers and compiled libraries of the packages a recipe
//! requires into one output folder with the conventional `include`, `lib` and
//! `bin` layout (plus `debug/` counterparts), so downstream builds only need
//! one include path and one library path.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod aggregator;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod layout;
mod path_utils;
mod progress;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&cli.recipe, cli.quiet, args),
        Commands::Info(args) => commands::info::run(&cli.recipe, &args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,depfold=warn",
        1 => "warn,depfold=info",
        2 => "info,depfold=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(console::Term::stderr().is_term())
                .with_target(false),
        )
        .init();
}
