//! Pattern-driven copying from one package subdirectory into the output tree

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::domain::ArtifactRule;
use crate::error::{self, DepfoldError, Result};

/// Compiled file-name patterns of one artifact rule
pub struct FileMatcher {
    globs: Vec<Glob<'static>>,
}

impl FileMatcher {
    pub fn new(patterns: &[&'static str]) -> Result<Self> {
        let globs = patterns
            .iter()
            .map(|&pattern| {
                Glob::new(pattern).map_err(|e| DepfoldError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { globs })
    }

    /// Case-insensitive match of a bare file name; patterns are lowercase
    pub fn is_match(&self, file_name: &str) -> bool {
        let lowered = file_name.to_lowercase();
        let candidate = CandidatePath::from(lowered.as_str());
        self.globs
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    }
}

/// One file placed into the output tree
#[derive(Debug, Clone)]
pub struct CopiedFile {
    pub target: PathBuf,

    /// A file with the same target path was already there
    pub overwrote: bool,
}

/// Copy every file below `src` whose name matches the rule into `dst`
///
/// A missing `src` (or one that is not a directory) copies nothing. With
/// `keep_path` the path relative to `src` is mirrored; otherwise files land
/// directly in `dst` and a later file with the same name replaces an earlier one.
pub fn copy_matching(
    src: &Path,
    dst: &Path,
    rule: &ArtifactRule,
    matcher: &FileMatcher,
) -> Result<Vec<CopiedFile>> {
    if !src.is_dir() {
        return Ok(Vec::new());
    }

    let mut copied = Vec::new();

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| walk_error(src, &e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !matcher.is_match(&file_name) {
            continue;
        }

        let target = if rule.keep_path {
            let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
            dst.join(relative)
        } else {
            dst.join(entry.file_name())
        };

        let overwrote = target.exists();
        copy_file(entry.path(), &target)?;

        if overwrote {
            tracing::debug!(
                source = %entry.path().display(),
                target = %target.display(),
                "replaced file copied earlier"
            );
        } else {
            tracing::trace!(
                source = %entry.path().display(),
                target = %target.display(),
                "copied"
            );
        }

        copied.push(CopiedFile {
            target,
            overwrote,
        });
    }

    Ok(copied)
}

/// Ensure parent directory exists for a path
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| error::fs::write_failed(parent, &e))?;
    }
    Ok(())
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    std::fs::copy(source, target)
        .map_err(|e| error::fs::write_failed(target, &e))
        .map(|_| ())
}

fn walk_error(src: &Path, err: &walkdir::Error) -> DepfoldError {
    error::fs::read_failed(err.path().unwrap_or(src), err)
}
