//! CLI definitions using clap derive API
//!
//! Each command's argument type lives in its own submodule:
//! - generate: Generate command arguments
//! - info: Info command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RECIPE_FILE;

pub mod completions;
pub mod generate;
pub mod info;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use info::InfoArgs;

/// depfold - fold dependency headers and libraries into one package layout
#[derive(Parser, Debug)]
#[command(
    name = "depfold",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Fold the headers and libraries of upstream packages into one layout",
    long_about = "depfold copies the public headers (include/) and compiled libraries (lib/, bin/) \
                  of every package a recipe requires into one output folder, for release and \
                  debug variants alike, so downstream builds need a single include and lib path.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  depfold generate                              \x1b[90m# Use ./depfold.yaml\x1b[0m\n   \
                  depfold generate -o build/deps                \x1b[90m# Write somewhere else\x1b[0m\n   \
                  depfold generate --dep boost=/opt/boost       \x1b[90m# Point a package elsewhere\x1b[0m\n   \
                  depfold info --json                           \x1b[90m# Paths for consumers\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Recipe file
    #[arg(
        long,
        short = 'r',
        global = true,
        env = "DEPFOLD_RECIPE",
        default_value = RECIPE_FILE
    )]
    pub recipe: PathBuf,

    /// More log output (repeat for more)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reset the output folder and copy every package's artifacts into it
    Generate(GenerateArgs),

    /// Show where consumers find libraries and headers
    Info(InfoArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
