//! Workspace errors

use super::EnvstrapError;

/// Creates a workspace not found error
pub fn not_found(path: impl Into<String>) -> EnvstrapError {
    EnvstrapError::WorkspaceNotFound { path: path.into() }
}
