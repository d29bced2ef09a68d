//! Recipe file errors

use super::DepfoldError;

/// Creates a recipe not found error
pub fn not_found(path: impl Into<String>) -> DepfoldError {
    DepfoldError::ConfigNotFound { path: path.into() }
}

/// Creates a recipe parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DepfoldError {
    DepfoldError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid recipe error
pub fn invalid(message: impl Into<String>) -> DepfoldError {
    DepfoldError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a recipe read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DepfoldError {
    DepfoldError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
