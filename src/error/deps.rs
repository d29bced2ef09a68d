//! Dependency descriptor errors

use super::DepfoldError;

/// Creates a missing package folder error
pub fn folder_missing(name: impl Into<String>) -> DepfoldError {
    DepfoldError::DependencyFolderMissing { name: name.into() }
}

/// Creates an invalid `--dep` override error
pub fn invalid_override(input: impl Into<String>) -> DepfoldError {
    DepfoldError::InvalidDependencyOverride {
        input: input.into(),
    }
}
