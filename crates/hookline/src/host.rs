// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host-side plugin instantiation driven by configuration.
//!
//! A `Host` reads `[plugins.<name>]` sections to decide which target version
//! each plugin instance requests and which configuration object its handlers
//! receive on dispatch.

use hookline_config::{HooklineConfig, PluginSettings};
use hookline_core::{HooklineError, Payload, PluginConfig};
use hookline_plugin::{HooklinePlugin, VersionedPlugin};
use tracing::{info, warn};

/// Creates plugin instances from a loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Host {
    config: HooklineConfig,
}

impl Host {
    /// Create a host around an already loaded and validated configuration.
    pub fn new(config: HooklineConfig) -> Self {
        Self { config }
    }

    /// The configuration this host was created with.
    pub fn config(&self) -> &HooklineConfig {
        &self.config
    }

    /// Settings for plugin `name`.
    pub fn settings(&self, name: &str) -> Result<&PluginSettings, HooklineError> {
        self.config.plugin(name).ok_or_else(|| {
            HooklineError::Config(format!("no [plugins.{name}] section configured"))
        })
    }

    /// Construct `plugin` with the target version configured for `name`.
    ///
    /// Registry construction errors are returned as-is. A target with no
    /// matching handler still constructs; it is reported with a warning and
    /// fails on `start`.
    pub fn instantiate<P: VersionedPlugin>(
        &self,
        name: &str,
        plugin: P,
    ) -> Result<HostedPlugin<P>, HooklineError> {
        let settings = self.settings(name)?;
        let instance = HooklinePlugin::new(plugin, settings.target_version.clone())?;

        if instance.is_resolvable() {
            info!(
                plugin = name,
                target_version = %instance.target_version(),
                handler = instance.handler_name().unwrap_or_default(),
                "plugin instantiated"
            );
        } else {
            warn!(
                plugin = name,
                target_version = %instance.target_version(),
                available = ?instance.available_versions(),
                "plugin has no handler for configured target version"
            );
        }

        Ok(HostedPlugin {
            name: name.to_string(),
            instance,
            config: settings.config.clone(),
        })
    }
}

/// A plugin instance paired with the configuration object from its section.
pub struct HostedPlugin<P: VersionedPlugin> {
    name: String,
    instance: HooklinePlugin<P>,
    config: PluginConfig,
}

impl<P: VersionedPlugin> HostedPlugin<P> {
    /// Dispatch `payload` with the configured configuration object.
    pub fn start(&self, payload: &Payload) -> Result<P::Output, P::Error> {
        self.instance.start(payload, &self.config)
    }

    /// The configured plugin name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration object handed to handlers.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// The underlying plugin instance.
    pub fn instance(&self) -> &HooklinePlugin<P> {
        &self.instance
    }
}

impl<P: VersionedPlugin> std::fmt::Debug for HostedPlugin<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedPlugin")
            .field("name", &self.name)
            .field("instance", &self.instance)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_plugin::{VersionedHandler, plugin_version};
    use serde_json::json;

    struct Echo;

    impl Echo {
        fn echo(&self, payload: &Payload, config: &PluginConfig) -> Result<String, HooklineError> {
            let who = payload.get("who").and_then(|v| v.as_str()).unwrap_or("?");
            let greeting = config.get("greeting").and_then(|v| v.as_str()).unwrap_or("hi");
            Ok(format!("{greeting} {who}"))
        }
    }

    impl VersionedPlugin for Echo {
        type Output = String;
        type Error = HooklineError;

        fn handlers() -> Vec<VersionedHandler<Self, String, HooklineError>> {
            vec![plugin_version("1.0.0").apply(Echo::echo)]
        }
    }

    fn host_with(target: &str) -> Host {
        let mut config = HooklineConfig::default();
        let mut plugin_config = PluginConfig::new();
        plugin_config.insert("greeting".into(), json!("hello"));
        config.plugins.insert(
            "echo".into(),
            PluginSettings {
                target_version: target.into(),
                config: plugin_config,
            },
        );
        Host::new(config)
    }

    #[test]
    fn configured_config_reaches_handler() {
        let hosted = host_with("1.0.0").instantiate("echo", Echo).unwrap();
        let mut payload = Payload::new();
        payload.insert("who".into(), json!("ada"));
        assert_eq!(hosted.start(&payload).unwrap(), "hello ada");
        assert_eq!(hosted.name(), "echo");
        assert_eq!(hosted.config()["greeting"], json!("hello"));
    }

    #[test]
    fn unconfigured_plugin_is_a_config_error() {
        let err = Host::default().instantiate("echo", Echo).unwrap_err();
        assert!(matches!(err, HooklineError::Config(ref m) if m.contains("[plugins.echo]")));
    }

    #[test]
    fn unresolvable_target_fails_on_start_only() {
        let hosted = host_with("2.0.0").instantiate("echo", Echo).unwrap();
        assert!(!hosted.instance().is_resolvable());
        assert!(matches!(
            hosted.start(&Payload::new()),
            Err(HooklineError::UnresolvedVersion { .. })
        ));
    }
}
