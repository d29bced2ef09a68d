//! Package metadata exposed to downstream build consumers
//!
//! Consumers only rely on two paths: libraries under `lib` and headers
//! under `include`, both relative to the output root.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Recipe;
use crate::domain::{Category, Variant};

/// What a consumer needs to link against the produced layout
#[derive(Debug, Clone, Serialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,

    /// Declared requirements as `name` or `name/version`
    pub requires: Vec<String>,

    /// Library directories, relative to `package_folder`
    pub libdirs: Vec<String>,

    /// Header directories, relative to `package_folder`
    pub includedirs: Vec<String>,

    /// Output root the layout is generated into
    pub package_folder: PathBuf,
}

impl PackageInfo {
    pub fn new(recipe: &Recipe, output_root: &Path) -> Self {
        let requires = recipe
            .requires
            .iter()
            .map(|r| match &r.version {
                Some(version) => format!("{}/{}", r.name, version),
                None => r.name.clone(),
            })
            .collect();

        Self {
            name: recipe.name.clone(),
            version: recipe.version.clone(),
            requires,
            libdirs: vec![Category::Lib.dir_name().to_string()],
            includedirs: vec![Category::Include.dir_name().to_string()],
            package_folder: output_root.to_path_buf(),
        }
    }

    /// Absolute library directories
    pub fn lib_paths(&self) -> Vec<PathBuf> {
        self.libdirs
            .iter()
            .map(|d| self.package_folder.join(d))
            .collect()
    }

    /// Absolute header directories
    pub fn include_paths(&self) -> Vec<PathBuf> {
        self.includedirs
            .iter()
            .map(|d| self.package_folder.join(d))
            .collect()
    }

    /// Debug-variant counterpart of a release directory, e.g. `debug/lib`
    pub fn debug_dir(category: Category) -> PathBuf {
        category.subdir(Variant::Debug)
    }
}
