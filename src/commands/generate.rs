//! Generate command: reset the output folder and fold every package into it

use std::fmt::Write as _;
use std::path::Path;

use console::{Term, style};

use crate::aggregator::{Aggregator, GenerateReport};
use crate::cli::GenerateArgs;
use crate::config::{DependencyOverride, Recipe};
use crate::domain::{Category, Variant};
use crate::error::Result;
use crate::path_utils;
use crate::progress::ProgressDisplay;

/// Run generate command
pub fn run(recipe_path: &Path, quiet: bool, args: GenerateArgs) -> Result<()> {
    let (recipe, output_root) = super::load_recipe(recipe_path, args.output.as_deref())?;

    let overrides: Vec<DependencyOverride> = args
        .dependencies
        .into_iter()
        .map(|o| DependencyOverride {
            path: path_utils::absolutize(&o.path),
            ..o
        })
        .collect();
    let dependencies = recipe.resolve(&overrides)?;

    tracing::info!(
        package = %format!("{}/{}", recipe.name, recipe.version),
        output = %output_root.display(),
        dependencies = dependencies.len(),
        "generating package layout"
    );

    let show_progress = !quiet && !args.no_progress && Term::stderr().is_term();
    let progress = show_progress.then(|| ProgressDisplay::new(dependencies.len() as u64));

    let mut aggregator = Aggregator::new(&output_root).protect(&recipe.base_dir);
    if let Some(progress) = &progress {
        aggregator = aggregator.with_progress(progress);
    }
    let report = aggregator.run(&dependencies)?;

    if !quiet {
        print!("{}", format_summary(&recipe, &report));
    }

    Ok(())
}

/// Human-readable summary of a run
pub fn format_summary(recipe: &Recipe, report: &GenerateReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}/{} into {}",
        style("Generated").green().bold(),
        recipe.name,
        recipe.version,
        style(report.output_root.display()).cyan()
    );

    for variant in Variant::ALL {
        let counts: Vec<String> = Category::ALL
            .iter()
            .map(|&category| format!("{category}: {}", report.count(variant, category)))
            .collect();
        let _ = writeln!(out, "  {:<8} {}", variant.as_str(), counts.join("  "));
    }

    let _ = writeln!(
        out,
        "  {} {}, {} {}",
        report.dependencies.len(),
        plural(report.dependencies.len(), "dependency", "dependencies"),
        report.total(),
        plural(report.total(), "file", "files"),
    );

    if report.overwritten > 0 {
        let _ = writeln!(
            out,
            "  {} {} replaced by a later dependency with the same name",
            style(report.overwritten).yellow(),
            plural(report.overwritten, "file", "files"),
        );
    }

    if report.duplicates > 0 {
        let _ = writeln!(
            out,
            "  {} {} replaced by a same-named file of the same dependency",
            style(report.duplicates).yellow(),
            plural(report.duplicates, "file", "files"),
        );
    }

    out
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
