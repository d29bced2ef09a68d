//! Cross-platform path utilities
//!
//! Paths are shown and glob-matched with forward slashes on every platform.

use std::path::{Path, PathBuf};

/// Convert a path to a string with forward slashes
///
/// # Examples
///
/// ```ignore
/// use std::path::Path;
///
/// assert_eq!(to_forward_slashes(Path::new("C:\\include\\a.h")), "C:/include/a.h");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Absolute form of `path` without resolving symlinks or requiring it to exist
///
/// Relative paths are joined onto the current directory.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Canonical form of `path`, canonicalizing its nearest existing ancestor
/// when the path itself does not exist yet
pub fn canonical_or_absolute(path: &Path) -> PathBuf {
    let absolute = absolutize(path);

    let mut missing = Vec::new();
    let mut current = absolute.as_path();
    loop {
        if let Ok(canonical) = dunce::canonicalize(current) {
            return missing
                .iter()
                .rev()
                .fold(canonical, |acc, part| acc.join(part));
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return absolute,
        }
    }
}

/// `true` when `inner` is `outer` or lies somewhere below it
pub fn is_same_or_inside(inner: &Path, outer: &Path) -> bool {
    canonical_or_absolute(inner).starts_with(canonical_or_absolute(outer))
}
