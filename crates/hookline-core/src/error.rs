// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Hookline plugin framework.

use thiserror::Error;

/// The primary error type used across registry construction and dispatch.
#[derive(Debug, Error)]
pub enum HooklineError {
    /// A tagged handler carries a label that is not valid semver syntax.
    #[error("invalid version format `{version}` on handler `{handler}`: {source}")]
    InvalidVersionFormat {
        version: String,
        handler: String,
        source: semver::Error,
    },

    /// Two handlers on the same plugin share a version label.
    #[error("version {version} is already registered")]
    DuplicateVersion { version: String },

    /// No handler is registered under the requested target version.
    #[error("no handler registered for version {requested} (available: {})", format_available(.available))]
    UnresolvedVersion {
        requested: String,
        available: Vec<String>,
    },

    /// Host-side configuration errors (missing plugin section, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure raised by a handler body.
    ///
    /// Provided for plugin authors who do not need their own error type;
    /// the registry never produces it.
    #[error("handler error: {message}")]
    Handler {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HooklineError {
    /// Shorthand for a handler failure without an underlying source.
    pub fn handler(message: impl Into<String>) -> Self {
        HooklineError::Handler {
            message: message.into(),
            source: None,
        }
    }
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}
