//! Settings file errors

use super::EnvstrapError;

/// Creates a settings parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> EnvstrapError {
    EnvstrapError::SettingsParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a settings read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> EnvstrapError {
    EnvstrapError::SettingsReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid settings error
pub fn invalid(message: impl Into<String>) -> EnvstrapError {
    EnvstrapError::SettingsInvalid {
        message: message.into(),
    }
}
