//! Common test utilities for depfold integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch project directory holding a recipe and package folders
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write `depfold.yaml`
    pub fn write_recipe(&self, yaml: &str) {
        self.write_file("depfold.yaml", yaml);
    }

    /// Create an installed package under `deps/<name>` with the given files.
    ///
    /// Every file's content is `"<name>:<path>"`.
    pub fn create_package(&self, name: &str, files: &[&str]) -> PathBuf {
        let package = self.path.join("deps").join(name);
        std::fs::create_dir_all(&package).expect("Failed to create package directory");
        for file in files {
            self.write_file(
                &format!("deps/{name}/{file}"),
                &format!("{name}:{file}"),
            );
        }
        package
    }

    /// Relative path -> content of every file below `dir`
    pub fn snapshot(&self, dir: &str) -> BTreeMap<String, String> {
        let root = self.path.join(dir);
        let mut files = BTreeMap::new();
        collect_files(&root, &root, &mut files);
        files
    }

    /// Relative paths of every file below `dir`
    pub fn files_under(&self, dir: &str) -> Vec<String> {
        self.snapshot(dir).into_keys().collect()
    }

    /// `depfold` command running inside this project
    pub fn depfold(&self) -> Command {
        let mut cmd = depfold_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// The real depfold binary, isolated from the caller's environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn depfold_cmd() -> Command {
    let mut cmd = Command::cargo_bin("depfold").expect("depfold binary should be built");
    cmd.env_remove("DEPFOLD_RECIPE")
        .env_remove("DEPFOLD_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn collect_files(root: &Path, dir: &Path, files: &mut BTreeMap<String, String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, files);
        } else {
            let relative = path
                .strip_prefix(root)
                .expect("entry below root")
                .to_string_lossy()
                .replace('\\', "/");
            let content = std::fs::read_to_string(&path).unwrap_or_default();
            files.insert(relative, content);
        }
    }
}

/// Recipe requiring two packages under `deps/`
pub const TWO_PACKAGE_RECIPE: &str = r#"name: slang-common
version: "1.0"
requires:
  - name: A
    version: "1.0"
    path: deps/A
  - name: B
    version: "2.0"
    path: deps/B
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.path.exists());
    }

    #[test]
    fn test_project_file_operations() {
        let project = TestProject::new();
        project.write_file("test/file.txt", "hello");
        assert!(project.file_exists("test/file.txt"));
        assert_eq!(project.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_create_package() {
        let project = TestProject::new();
        project.create_package("A", &["include/a.h", "lib/liba.a"]);
        assert_eq!(
            project.files_under("deps/A"),
            vec!["include/a.h".to_string(), "lib/liba.a".to_string()]
        );
        assert_eq!(project.read_file("deps/A/lib/liba.a"), "A:lib/liba.a");
    }
}
