// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates constraints that cannot be expressed via serde attributes, such
//! as recognized log levels and semver-shaped target versions.

use std::str::FromStr;

use hookline_core::LogLevel;

use crate::diagnostic::ConfigError;
use crate::model::HooklineConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &HooklineConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.host.log_level.trim();
    if LogLevel::from_str(level).is_err() {
        errors.push(ConfigError::Validation {
            message: format!(
                "host.log_level `{level}` is not one of trace, debug, info, warn, error"
            ),
        });
    }

    for (name, settings) in &config.plugins {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "plugin names must not be empty".to_string(),
            });
        }

        let target = &settings.target_version;
        if target.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("plugins.{name}.target_version must not be empty"),
            });
            continue;
        }

        // Handler labels must be valid semver, so anything else can never resolve.
        if let Err(e) = semver::Version::parse(target) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "plugins.{name}.target_version `{target}` is not a valid semantic version: {e}"
                ),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
