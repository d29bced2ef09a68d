//! Info command: the paths a consumer should put on its include and link lines

use std::fmt::Write as _;
use std::path::Path;

use console::style;

use crate::cli::InfoArgs;
use crate::domain::Category;
use crate::error::Result;
use crate::layout::PackageInfo;

/// Run info command
pub fn run(recipe_path: &Path, args: &InfoArgs) -> Result<()> {
    let (recipe, output_root) = super::load_recipe(recipe_path, args.output.as_deref())?;
    let info = PackageInfo::new(&recipe, &output_root);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", format_info(&info));
    }

    Ok(())
}

pub fn format_info(info: &PackageInfo) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        style(&info.name).bold(),
        style(&info.version).dim()
    );
    let _ = writeln!(out, "  package folder: {}", info.package_folder.display());

    if info.requires.is_empty() {
        let _ = writeln!(out, "  requires: (none)");
    } else {
        let _ = writeln!(out, "  requires: {}", info.requires.join(", "));
    }

    for path in info.lib_paths() {
        let _ = writeln!(out, "  libdirs: {}", style(path.display()).cyan());
    }
    for path in info.include_paths() {
        let _ = writeln!(out, "  includedirs: {}", style(path.display()).cyan());
    }
    let _ = writeln!(
        out,
        "  debug: {}, {}",
        PackageInfo::debug_dir(Category::Lib).display(),
        PackageInfo::debug_dir(Category::Include).display()
    );

    out
}
