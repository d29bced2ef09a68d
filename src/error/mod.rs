//! Error types and handling for depfold
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by error domain:
//! - [`config`]: Recipe file errors
//! - [`deps`]: Dependency descriptor errors
//! - [`fs`]: File system errors

pub mod config;
pub mod deps;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for depfold operations
#[derive(Error, Diagnostic, Debug)]
pub enum DepfoldError {
    // Recipe errors
    #[error("Recipe file not found: {path}")]
    #[diagnostic(
        code(depfold::config::not_found),
        help("Create a depfold.yaml or point to one with --recipe")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read recipe file: {path}")]
    #[diagnostic(code(depfold::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse recipe file: {path}: {reason}")]
    #[diagnostic(code(depfold::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid recipe: {message}")]
    #[diagnostic(code(depfold::config::invalid))]
    ConfigInvalid { message: String },

    // Dependency errors
    #[error("No package folder for dependency '{name}'")]
    #[diagnostic(
        code(depfold::deps::folder_missing),
        help("Set 'path' for the dependency in the recipe or pass --dep {name}=<DIR>")
    )]
    DependencyFolderMissing { name: String },

    #[error("Invalid dependency override: {input}")]
    #[diagnostic(
        code(depfold::deps::invalid_override),
        help("Overrides use the form NAME[/VERSION]=PATH, e.g. --dep boost/1.87.0=./deps/boost")
    )]
    InvalidDependencyOverride { input: String },

    // Output layout errors
    #[error("Failed to reset output folder: {path}: {reason}")]
    #[diagnostic(
        code(depfold::layout::reset_failed),
        help("Check that nothing else holds files open under the output folder")
    )]
    OutputResetFailed { path: String, reason: String },

    #[error("Output folder {output} would delete input {input}")]
    #[diagnostic(
        code(depfold::layout::overlaps_input),
        help("Choose an output folder that contains neither the recipe nor any package folder")
    )]
    OutputOverlapsInput { output: String, input: String },

    #[error("Invalid artifact pattern '{pattern}': {reason}")]
    #[diagnostic(code(depfold::layout::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(depfold::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(depfold::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(depfold::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DepfoldError {
    fn from(err: std::io::Error) -> Self {
        DepfoldError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DepfoldError {
    fn from(err: serde_yaml::Error) -> Self {
        DepfoldError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DepfoldError {
    fn from(err: serde_json::Error) -> Self {
        DepfoldError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DepfoldError>;
