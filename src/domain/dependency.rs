//! Resolved dependency descriptor
//!
//! The package folder of a descriptor is only ever read from.

use std::fmt;
use std::path::PathBuf;

use super::artifact::{Category, Variant};

/// An upstream package whose installed artifacts get folded into the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDescriptor {
    pub name: String,

    /// Version constraint as declared; informational only
    pub version: Option<String>,

    /// Root of the installed package (holds `include`, `lib`, `bin`, `debug/...`)
    pub package_folder: PathBuf,
}

impl DependencyDescriptor {
    pub fn new(
        name: impl Into<String>,
        version: Option<String>,
        package_folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            package_folder: package_folder.into(),
        }
    }

    /// Source directory for one category of one variant, which may not exist
    pub fn source_dir(&self, category: Category, variant: Variant) -> PathBuf {
        self.package_folder.join(category.subdir(variant))
    }
}

impl fmt::Display for DependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}/{}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}
