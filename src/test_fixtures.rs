//! Test fixtures shared by the unit tests.
//!
//! Scratch trees are created under an absolute temp base, never under the
//! current working directory (e.g. when `TMPDIR=tmp`).
//!
//! ```ignore
//! let temp = create_temp_dir();
//! let boost = create_package(temp.path(), "boost", &["include/boost/config.hpp", "lib/libboost_system.a"]);
//! ```

#![allow(clippy::expect_used)]

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Absolute directory suitable for creating temporary directories.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else if cfg!(windows) {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map_or_else(|_| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
    path
}

/// Create an installed package folder `root/name` holding `files`.
///
/// Every file's content is `"<name>:<relative path>"` so copies can be traced
/// back to the package they came from.
pub fn create_package(root: &Path, name: &str, files: &[&str]) -> PathBuf {
    let package = root.join(name);
    std::fs::create_dir_all(&package).expect("Failed to create package folder");
    for file in files {
        write_file(&package, file, &format!("{name}:{file}"));
    }
    package
}
