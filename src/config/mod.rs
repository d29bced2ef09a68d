//! Recipe file handling
//!
//! A recipe (`depfold.yaml`) names the package being produced, the folder the
//! unified layout is written to and the upstream packages it is folded from:
//!
//! ```yaml
//! name: slang-common
//! version: "1.0"
//! output: build/generators
//! requires:
//!   - name: slang
//!     version: "8.0"
//!     path: deps/slang
//!   - boost/1.87.0
//! ```

pub mod overrides;
pub mod requirement;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::DependencyDescriptor;
use crate::error::{self, Result};

pub use overrides::DependencyOverride;
pub use requirement::Requirement;

/// Default recipe file name, looked up in the current directory
pub const RECIPE_FILE: &str = "depfold.yaml";

/// Output folder used when the recipe does not name one
pub const DEFAULT_OUTPUT: &str = "generators";

/// Parsed recipe file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub name: String,

    #[serde(deserialize_with = "string_or_number")]
    pub version: String,

    /// Output folder, relative to the recipe file unless absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub requires: Vec<Requirement>,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Recipe {
    /// Parse a recipe from YAML, resolving relative paths against `base_dir`
    pub fn from_yaml(yaml: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut recipe: Self = serde_yaml::from_str(yaml)?;
        recipe.base_dir = base_dir.into();
        recipe.validate()?;
        Ok(recipe)
    }

    /// Load a recipe file from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        let path = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        let mut recipe: Self = serde_yaml::from_str(&content).map_err(|e| {
            error::config::parse_failed(path.display().to_string(), e.to_string())
        })?;
        recipe.base_dir = base_dir;
        recipe.validate()?;

        tracing::debug!(
            recipe = %path.display(),
            requires = recipe.requires.len(),
            "loaded recipe"
        );

        Ok(recipe)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(error::config::invalid("recipe name cannot be empty"));
        }
        if self.version.trim().is_empty() {
            return Err(error::config::invalid("recipe version cannot be empty"));
        }

        let mut seen = HashSet::new();
        for requirement in &self.requires {
            requirement.validate()?;
            if !seen.insert(requirement.name.as_str()) {
                return Err(error::config::invalid(format!(
                    "dependency '{}' is declared more than once",
                    requirement.name
                )));
            }
        }

        Ok(())
    }

    /// Output root, honoring an explicit override
    pub fn output_root(&self, output_override: Option<&Path>) -> PathBuf {
        match output_override {
            Some(path) => path.to_path_buf(),
            None => self
                .base_dir
                .join(self.output.as_deref().unwrap_or(Path::new(DEFAULT_OUTPUT))),
        }
    }

    /// Turn requirements plus `--dep` overrides into dependency descriptors
    ///
    /// Overrides replace the package folder (and version, when given) of the
    /// requirement with the same name; overrides for undeclared names are
    /// appended in the order given. Every dependency must end up with a folder.
    pub fn resolve(&self, overrides: &[DependencyOverride]) -> Result<Vec<DependencyDescriptor>> {
        let mut resolved = Vec::with_capacity(self.requires.len() + overrides.len());

        for requirement in &self.requires {
            let over = overrides.iter().rev().find(|o| o.name == requirement.name);

            let folder = match over {
                Some(o) => o.path.clone(),
                None => requirement
                    .path
                    .as_ref()
                    .map(|p| self.base_dir.join(p))
                    .ok_or_else(|| error::deps::folder_missing(&requirement.name))?,
            };
            let version = over
                .and_then(|o| o.version.clone())
                .or_else(|| requirement.version.clone());

            resolved.push(DependencyDescriptor::new(&requirement.name, version, folder));
        }

        for (index, over) in overrides.iter().enumerate() {
            let declared = self.requires.iter().any(|r| r.name == over.name);
            let seen_earlier = overrides[..index].iter().any(|o| o.name == over.name);
            if declared || seen_earlier {
                continue;
            }
            let last = overrides
                .iter()
                .rev()
                .find(|o| o.name == over.name)
                .unwrap_or(over);
            resolved.push(DependencyDescriptor::new(
                &last.name,
                last.version.clone(),
                last.path.clone(),
            ));
        }

        Ok(resolved)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VersionValue {
    String(String),
    Int(i64),
    Float(f64),
}

impl VersionValue {
    /// Integers are taken as written; a YAML float would drop trailing zeros
    /// (`1.10` reads as `1.1`), so it has to be quoted instead.
    fn into_version<E: de::Error>(self) -> std::result::Result<String, E> {
        match self {
            VersionValue::String(s) => Ok(s),
            VersionValue::Int(i) => Ok(i.to_string()),
            VersionValue::Float(f) => Err(E::custom(format!(
                "version {f} is read as a number and may lose digits; quote it, e.g. version: \"{f}\""
            ))),
        }
    }
}

/// Accept `version: 2` as well as `version: "1.10"`
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    VersionValue::deserialize(deserializer)?.into_version()
}

pub(crate) fn optional_string_or_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<VersionValue>::deserialize(deserializer)?
        .map(VersionValue::into_version)
        .transpose()
}
