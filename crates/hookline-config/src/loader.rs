// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hookline.toml` > `~/.config/hookline/hookline.toml` > `/etc/hookline/hookline.toml`
//! with environment variable overrides via `HOOKLINE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::HooklineConfig;

pub(crate) const LOCAL_CONFIG: &str = "hookline.toml";
pub(crate) const SYSTEM_CONFIG: &str = "/etc/hookline/hookline.toml";

/// Path of the per-user config file, if a config directory is known.
pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hookline/hookline.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hookline/hookline.toml` (system-wide)
/// 3. `~/.config/hookline/hookline.toml` (user XDG config)
/// 4. `./hookline.toml` (local directory)
/// 5. `HOOKLINE_*` environment variables
pub fn load_config() -> Result<HooklineConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and embedded configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<HooklineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HooklineConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HooklineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HooklineConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(HooklineConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `HOOKLINE_HOST_LOG_LEVEL` must map to `host.log_level`.
fn env_provider() -> Env {
    Env::prefixed("HOOKLINE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a config key path.
///
/// `plugins_<name>_target_version` addresses a plugin section; the plugin
/// name is whatever sits between the two fixed parts.
pub(crate) fn map_env_key(key: &str) -> String {
    if let Some(name) = key
        .strip_prefix("plugins_")
        .and_then(|rest| rest.strip_suffix("_target_version"))
    {
        return format!("plugins.{name}.target_version");
    }
    key.replacen("host_", "host.", 1)
}
