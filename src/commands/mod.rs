//! Command implementations for the depfold CLI

pub mod completions;
pub mod generate;
pub mod info;
pub mod version;

use std::path::{Path, PathBuf};

use crate::config::Recipe;
use crate::error::Result;
use crate::path_utils;

/// Load the recipe and work out the output root every command agrees on
///
/// An `--output` given on the command line is relative to the current
/// directory; the recipe's own `output` is relative to the recipe file.
pub(crate) fn load_recipe(recipe_path: &Path, output: Option<&Path>) -> Result<(Recipe, PathBuf)> {
    let recipe = Recipe::load(recipe_path)?;
    let output = output.map(path_utils::absolutize);
    let output_root = recipe.output_root(output.as_deref());
    Ok((recipe, output_root))
}
