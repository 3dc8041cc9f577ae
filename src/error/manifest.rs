//! Dependency manifest errors

use super::EnvstrapError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> EnvstrapError {
    EnvstrapError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> EnvstrapError {
    EnvstrapError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a pin conflict error
pub fn pin_conflict(
    package: impl Into<String>,
    pinned_version: impl Into<String>,
    manifest_version: impl Into<String>,
    location: impl Into<String>,
) -> EnvstrapError {
    EnvstrapError::PinConflict {
        package: package.into(),
        pinned_version: pinned_version.into(),
        manifest_version: manifest_version.into(),
        location: location.into(),
    }
}
