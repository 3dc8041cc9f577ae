//! Error types and handling for envstrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`settings`]: Settings file errors
//! - [`workspace`]: Workspace errors
//! - [`manifest`]: Dependency manifest errors
//!
//! Step failures are not errors: a failing installer invocation is an
//! expected outcome folded into the exit-code contract. Only conditions
//! that prevent the sequence from being attempted at all take this path.

pub mod manifest;
pub mod settings;
pub mod workspace;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for envstrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum EnvstrapError {
    // Settings errors
    #[error("Failed to parse settings file '{path}': {reason}")]
    #[diagnostic(
        code(envstrap::settings::parse_failed),
        help("Check that the file is valid YAML matching the envstrap.yaml schema")
    )]
    SettingsParseFailed { path: String, reason: String },

    #[error("Failed to read settings file '{path}': {reason}")]
    #[diagnostic(code(envstrap::settings::read_failed))]
    SettingsReadFailed { path: String, reason: String },

    #[error("Invalid settings: {message}")]
    #[diagnostic(code(envstrap::settings::invalid))]
    SettingsInvalid { message: String },

    // Workspace errors
    #[error("Workspace directory not found: {path}")]
    #[diagnostic(
        code(envstrap::workspace::not_found),
        help("Pass an existing directory with --workspace or run from inside one")
    )]
    WorkspaceNotFound { path: String },

    // Manifest errors
    #[error("Dependency manifest not found: {path}")]
    #[diagnostic(
        code(envstrap::manifest::not_found),
        help("Create the manifest or point at another one with --manifest")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read dependency manifest '{path}': {reason}")]
    #[diagnostic(code(envstrap::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error(
        "Manifest pins {package}=={manifest_version} but the foundation pins {package}=={pinned_version} ({location})"
    )]
    #[diagnostic(
        code(envstrap::manifest::pin_conflict),
        help(
            "Remove the conflicting manifest entry, or pass --allow-override to let the manifest version win"
        )
    )]
    PinConflict {
        package: String,
        pinned_version: String,
        manifest_version: String,
        location: String,
    },
}

/// Result type alias using EnvstrapError
pub type Result<T> = std::result::Result<T, EnvstrapError>;
