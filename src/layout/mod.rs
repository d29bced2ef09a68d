//! Output layout ownership
//!
//! An [`OutputLayout`] can only be obtained through [`OutputLayout::acquire`],
//! which wipes the output root first. Holding one means the tree below the
//! root contains nothing from a previous run.

pub mod info;

use std::path::{Path, PathBuf};

use crate::domain::{Category, Variant};
use crate::error::{self, Result};
use crate::path_utils;

pub use info::PackageInfo;

/// Directories advertised to consumers, created even when nothing lands in them
pub const ADVERTISED_DIRS: [Category; 2] = [Category::Lib, Category::Include];

/// Freshly reset output tree
#[derive(Debug)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Clear `root` and take ownership of it for one run
    ///
    /// `protected` lists paths that must survive the reset (the recipe
    /// directory); the output root may live below them but must not be one of
    /// them or contain one. `packages` are read-only input folders: the output
    /// root may neither contain one nor lie inside one. On any overlap nothing
    /// is deleted and the call fails.
    pub fn acquire(root: &Path, protected: &[&Path], packages: &[&Path]) -> Result<Self> {
        let root = path_utils::absolutize(root);

        for input in protected.iter().chain(packages) {
            if path_utils::is_same_or_inside(input, &root) {
                return Err(error::fs::overlaps_input(&root, input));
            }
        }
        for package in packages {
            if path_utils::is_same_or_inside(&root, package) {
                return Err(error::fs::overlaps_input(&root, package));
            }
        }

        reset(&root)?;

        for category in ADVERTISED_DIRS {
            let dir = root.join(category.subdir(Variant::Release));
            std::fs::create_dir_all(&dir).map_err(|e| error::fs::write_failed(&dir, &e))?;
        }

        tracing::debug!(output = %root.display(), "output folder reset");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Destination directory for one category of one variant
    pub fn dir(&self, category: Category, variant: Variant) -> PathBuf {
        self.root.join(category.subdir(variant))
    }
}

/// Remove whatever is at `root` and recreate it as an empty directory
fn reset(root: &Path) -> Result<()> {
    match std::fs::symlink_metadata(root) {
        Ok(meta) if meta.is_dir() => {
            std::fs::remove_dir_all(root).map_err(|e| error::fs::reset_failed(root, &e))?;
        }
        Ok(_) => {
            std::fs::remove_file(root).map_err(|e| error::fs::reset_failed(root, &e))?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(error::fs::reset_failed(root, &e)),
    }

    std::fs::create_dir_all(root).map_err(|e| error::fs::reset_failed(root, &e))
}
