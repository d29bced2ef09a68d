//! Version command implementation

use crate::domain::ARTIFACT_RULES;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("depfold {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Artifact patterns:");
    for rule in ARTIFACT_RULES {
        let placement = if rule.keep_path { "mirrored" } else { "flattened" };
        println!(
            "  {:<8} {} ({placement})",
            rule.category.dir_name(),
            rule.patterns.join(" ")
        );
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
