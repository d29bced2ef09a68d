use clap::Parser;
use std::path::PathBuf;

use crate::config::DependencyOverride;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate into the recipe's output folder:\n    depfold generate\n\n\
                  Generate into another folder:\n    depfold generate --output build/deps\n\n\
                  Take boost from a local install:\n    depfold generate --dep boost/1.87.0=/opt/boost")]
pub struct GenerateArgs {
    /// Output folder (replaces the recipe's `output`; wiped on every run)
    #[arg(long, short = 'o', env = "DEPFOLD_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Package folder for a dependency, as NAME[/VERSION]=PATH (repeatable)
    #[arg(long = "dep", value_name = "NAME[/VERSION]=PATH")]
    pub dependencies: Vec<DependencyOverride>,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}
