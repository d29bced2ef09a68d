//! A `requires` entry of the recipe
//!
//! Entries come in a long form (`name`, `version`, `path`) and a short
//! `name/version` reference form.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{self, Result};

/// Declared upstream package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub name: String,

    /// Version constraint; recorded, never resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Installed package folder, relative to the recipe file unless absolute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Requirement {
    /// Build a requirement from a `name` or `name/version` reference
    pub fn from_reference(reference: &str) -> Self {
        let (name, version) = split_reference(reference);
        Self {
            name,
            version,
            path: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if self.version.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(error::config::invalid(format!(
                "dependency '{}' has an empty version",
                self.name
            )));
        }
        Ok(())
    }
}

/// Split `name/version` into its parts; a bare name has no version
pub fn split_reference(reference: &str) -> (String, Option<String>) {
    match reference.trim().split_once('/') {
        Some((name, version)) => (name.trim().to_string(), Some(version.trim().to_string())),
        None => (reference.trim().to_string(), None),
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(error::config::invalid("dependency name cannot be empty"));
    }
    if name.chars().any(|c| c == '/' || c == '=' || c.is_whitespace()) {
        return Err(error::config::invalid(format!(
            "dependency name '{name}' may not contain '/', '=' or whitespace"
        )));
    }
    Ok(())
}

impl<'de> Deserialize<'de> for Requirement {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct LongForm {
            name: String,
            #[serde(default, deserialize_with = "super::optional_string_or_number")]
            version: Option<String>,
            #[serde(default)]
            path: Option<PathBuf>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Reference(String),
            Long(LongForm),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Reference(reference) => Requirement::from_reference(&reference),
            Repr::Long(long) => Requirement {
                name: long.name,
                version: long.version,
                path: long.path,
            },
        })
    }
}
