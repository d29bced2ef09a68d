use clap::Parser;
use std::path::PathBuf;

/// Arguments for the info command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show library and header paths:\n    depfold info\n\n\
                  Machine-readable output:\n    depfold info --json")]
pub struct InfoArgs {
    /// Output folder (replaces the recipe's `output`)
    #[arg(long, short = 'o', env = "DEPFOLD_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
