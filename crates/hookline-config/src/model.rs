// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Hookline hosts.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::BTreeMap;
use std::str::FromStr;

use hookline_core::{LogLevel, PluginConfig};
use serde::{Deserialize, Serialize};

/// Top-level Hookline configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HooklineConfig {
    /// Host process settings.
    #[serde(default)]
    pub host: HostConfig,

    /// Per-plugin settings keyed by plugin name.
    #[serde(default)]
    pub plugins: BTreeMap<String, PluginSettings>,
}

impl HooklineConfig {
    /// Settings for the plugin registered under `name`, if configured.
    pub fn plugin(&self, name: &str) -> Option<&PluginSettings> {
        self.plugins.get(name)
    }
}

/// Host process configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Include the event target (module path) in log lines.
    #[serde(default = "default_log_target")]
    pub log_target: bool,
}

impl HostConfig {
    /// Parsed log level, falling back to `info` for unrecognized values.
    ///
    /// Validation rejects unrecognized values before this is normally reached.
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_str(self.log_level.trim()).unwrap_or_default()
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_target: default_log_target(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_target() -> bool {
    true
}

/// Settings for one plugin instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginSettings {
    /// Version label the host requests from the plugin.
    pub target_version: String,

    /// Configuration object passed to the handler on every dispatch.
    #[serde(default)]
    pub config: PluginConfig,
}
