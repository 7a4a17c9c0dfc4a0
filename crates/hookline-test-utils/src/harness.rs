// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end host tests.
//!
//! `TestHarness` writes a `hookline.toml` into a temp directory, loads it
//! through the regular config pipeline, and wraps the result in a `Host`.

use std::path::{Path, PathBuf};

use hookline::Host;
use hookline_config::{HooklineConfig, PluginSettings, load_and_validate_path};
use hookline_core::{HooklineError, PluginConfig};

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    config: HooklineConfig,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config: HooklineConfig::default(),
        }
    }

    /// Configure plugin `name` to request `target_version`.
    pub fn with_plugin(mut self, name: &str, target_version: &str) -> Self {
        self.config.plugins.insert(
            name.to_string(),
            PluginSettings {
                target_version: target_version.to_string(),
                config: PluginConfig::new(),
            },
        );
        self
    }

    /// Set one key of plugin `name`'s configuration object.
    ///
    /// The plugin must already have been added with `with_plugin`.
    pub fn with_plugin_config(mut self, name: &str, key: &str, value: serde_json::Value) -> Self {
        if let Some(settings) = self.config.plugins.get_mut(name) {
            settings.config.insert(key.to_string(), value);
        }
        self
    }

    /// Set the host log level.
    pub fn with_log_level(mut self, level: &str) -> Self {
        self.config.host.log_level = level.to_string();
        self
    }

    /// Write the config to disk, load it back, and build the host.
    pub fn build(self) -> Result<TestHarness, HooklineError> {
        let temp_dir = tempfile::TempDir::new()
            .map_err(|e| HooklineError::Config(format!("temp dir: {e}")))?;
        let config_path = temp_dir.path().join("hookline.toml");

        let rendered = toml::to_string(&self.config)
            .map_err(|e| HooklineError::Config(format!("render config: {e}")))?;
        std::fs::write(&config_path, rendered)
            .map_err(|e| HooklineError::Config(format!("write config: {e}")))?;

        let config = load_and_validate_path(&config_path).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            HooklineError::Config(messages.join("; "))
        })?;

        Ok(TestHarness {
            host: Host::new(config),
            config_path,
            _temp_dir: temp_dir,
        })
    }
}

/// A host built from a config file on disk.
pub struct TestHarness {
    host: Host,
    config_path: PathBuf,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Start building a harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// The host loaded from the harness config file.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Path of the generated `hookline.toml`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
