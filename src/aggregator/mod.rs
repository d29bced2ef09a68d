//! Package aggregation
//!
//! Folds the installed artifacts of every dependency into one output layout:
//!
//! 1. The output root is reset (see [`OutputLayout::acquire`]).
//! 2. For each dependency, for each variant, for each artifact rule, the
//!    matching files of the package's category directory are copied into the
//!    output's category directory.
//!
//! Dependencies are processed in the order given. Flattened files that share
//! a name end up holding the content of the dependency processed last.

pub mod copy;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::domain::{ARTIFACT_RULES, ArtifactRule, Category, DependencyDescriptor, Variant};
use crate::error::Result;
use crate::layout::OutputLayout;
use crate::progress::ProgressDisplay;

use copy::{FileMatcher, copy_matching};

/// Outcome of one generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub output_root: PathBuf,

    /// Dependencies in the order they were folded in
    pub dependencies: Vec<String>,

    /// Files copied per (variant, category)
    pub counts: BTreeMap<(Variant, Category), usize>,

    /// Flattened copies that replaced a file from an earlier dependency
    pub overwritten: usize,

    /// Flattened copies that replaced a same-named file of the same dependency
    pub duplicates: usize,
}

impl GenerateReport {
    pub fn count(&self, variant: Variant, category: Category) -> usize {
        self.counts.get(&(variant, category)).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Copies dependency artifacts into an output root
pub struct Aggregator<'a> {
    output_root: PathBuf,
    protected: Vec<PathBuf>,
    progress: Option<&'a ProgressDisplay>,
}

impl<'a> Aggregator<'a> {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            protected: Vec::new(),
            progress: None,
        }
    }

    /// Extra path the output reset must never delete (e.g. the recipe directory)
    #[must_use]
    pub fn protect(mut self, path: impl Into<PathBuf>) -> Self {
        self.protected.push(path.into());
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a ProgressDisplay) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Reset the output root and fold every dependency into it
    pub fn run(&self, dependencies: &[DependencyDescriptor]) -> Result<GenerateReport> {
        let protected: Vec<&Path> = self.protected.iter().map(PathBuf::as_path).collect();
        let packages: Vec<&Path> = dependencies
            .iter()
            .map(|d| d.package_folder.as_path())
            .collect();

        let layout = OutputLayout::acquire(&self.output_root, &protected, &packages)?;

        let matchers = ARTIFACT_RULES
            .iter()
            .map(|rule| FileMatcher::new(rule.patterns).map(|m| (rule, m)))
            .collect::<Result<Vec<_>>>()?;

        let mut report = GenerateReport {
            output_root: layout.root().to_path_buf(),
            ..GenerateReport::default()
        };
        // Output file -> index of the dependency that wrote it
        let mut owners = HashMap::new();

        for (index, dependency) in dependencies.iter().enumerate() {
            if let Some(progress) = self.progress {
                progress.update_dependency(&dependency.to_string(), index + 1, dependencies.len());
            }

            let copied = self
                .fold_dependency(index, dependency, &layout, &matchers, &mut owners, &mut report)
                .inspect_err(|_| {
                    if let Some(progress) = self.progress {
                        progress.abandon();
                    }
                })?;

            tracing::info!(
                dependency = %dependency,
                folder = %dependency.package_folder.display(),
                files = copied,
                "folded dependency"
            );

            report.dependencies.push(dependency.to_string());
            if let Some(progress) = self.progress {
                progress.inc_dependency();
            }
        }

        if let Some(progress) = self.progress {
            progress.finish();
        }

        Ok(report)
    }

    fn fold_dependency(
        &self,
        index: usize,
        dependency: &DependencyDescriptor,
        layout: &OutputLayout,
        matchers: &[(&ArtifactRule, FileMatcher)],
        owners: &mut HashMap<PathBuf, usize>,
        report: &mut GenerateReport,
    ) -> Result<usize> {
        let mut total = 0;

        for variant in Variant::ALL {
            for (rule, matcher) in matchers {
                let src = dependency.source_dir(rule.category, variant);
                let dst = layout.dir(rule.category, variant);

                let copied = copy_matching(&src, &dst, rule, matcher)?;
                if copied.is_empty() {
                    continue;
                }

                if let Some(progress) = self.progress {
                    for file in &copied {
                        progress.update_file(&file.target.display().to_string());
                    }
                }

                for file in &copied {
                    let previous = owners.insert(file.target.clone(), index);
                    if file.overwrote {
                        match previous {
                            Some(owner) if owner != index => report.overwritten += 1,
                            _ => report.duplicates += 1,
                        }
                    }
                }
                *report.counts.entry((variant, rule.category)).or_default() += copied.len();
                total += copied.len();
            }
        }

        Ok(total)
    }
}
