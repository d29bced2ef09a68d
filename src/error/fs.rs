//! File system errors

use std::fmt::Display;
use std::path::Path;

use super::DepfoldError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: &impl Display) -> DepfoldError {
    DepfoldError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, err: &std::io::Error) -> DepfoldError {
    DepfoldError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an output reset failed error
pub fn reset_failed(path: &Path, err: &std::io::Error) -> DepfoldError {
    DepfoldError::OutputResetFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an error for an output folder that contains one of the inputs
pub fn overlaps_input(output: &Path, input: &Path) -> DepfoldError {
    DepfoldError::OutputOverlapsInput {
        output: output.display().to_string(),
        input: input.display().to_string(),
    }
}
