//! `--dep NAME[/VERSION]=PATH` command-line overrides

use std::path::PathBuf;
use std::str::FromStr;

use super::requirement::{split_reference, validate_name};
use crate::error::{self, DepfoldError, Result};

/// Package folder supplied on the command line for one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyOverride {
    pub name: String,
    pub version: Option<String>,
    pub path: PathBuf,
}

impl DependencyOverride {
    pub fn parse(input: &str) -> Result<Self> {
        let (reference, path) = input
            .split_once('=')
            .ok_or_else(|| error::deps::invalid_override(input))?;

        let (name, version) = split_reference(reference);
        if validate_name(&name).is_err() || version.as_deref() == Some("") {
            return Err(error::deps::invalid_override(input));
        }

        let path = path.trim();
        if path.is_empty() {
            return Err(error::deps::invalid_override(input));
        }

        Ok(Self {
            name,
            version,
            path: PathBuf::from(path),
        })
    }
}

impl FromStr for DependencyOverride {
    type Err = DepfoldError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}
