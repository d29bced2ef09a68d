//! Build variants, artifact categories and the copy rules that tie them together

use std::fmt;
use std::path::PathBuf;

/// Build configuration with its own parallel directory tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Release,
    Debug,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Release, Variant::Debug];

    /// Directory prefix of this variant below a package root
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Variant::Release => None,
            Variant::Debug => Some("debug"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Release => "release",
            Variant::Debug => "debug",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of artifact, named after the conventional subdirectory holding it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Include,
    Lib,
    Bin,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Include, Category::Lib, Category::Bin];

    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Include => "include",
            Category::Lib => "lib",
            Category::Bin => "bin",
        }
    }

    /// Path of this category's directory for a variant, relative to a package root
    ///
    /// `(Release, Lib)` is `lib`, `(Debug, Lib)` is `debug/lib`.
    pub fn subdir(self, variant: Variant) -> PathBuf {
        match variant.prefix() {
            Some(prefix) => PathBuf::from(prefix).join(self.dir_name()),
            None => PathBuf::from(self.dir_name()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// What to pick up from one category directory and how to place it
#[derive(Debug, Clone, Copy)]
pub struct ArtifactRule {
    pub category: Category,

    /// Glob patterns, matched against the file name at any depth below the category directory
    pub patterns: &'static [&'static str],

    /// Mirror the relative path (`true`) or flatten to the file name (`false`)
    pub keep_path: bool,
}

/// Headers keep their tree so equally named headers of different packages
/// stay apart; libraries and DLLs are flattened.
pub const ARTIFACT_RULES: &[ArtifactRule] = &[
    ArtifactRule {
        category: Category::Include,
        patterns: &["*.h", "*.hpp"],
        keep_path: true,
    },
    ArtifactRule {
        category: Category::Lib,
        patterns: &["*.a", "*.so", "*.lib", "*.dylib"],
        keep_path: false,
    },
    ArtifactRule {
        category: Category::Bin,
        patterns: &["*.dll"],
        keep_path: false,
    },
];
