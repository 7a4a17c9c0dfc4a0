// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin fixtures with known handler sets.

use std::sync::atomic::{AtomicUsize, Ordering};

use hookline_core::{HooklineError, Payload, PluginConfig};
use hookline_plugin::{VersionedHandler, VersionedPlugin, plugin_version};
use serde_json::{Value, json};

/// Two patch releases, plus one method that is never tagged.
#[derive(Debug, Default)]
pub struct SamplePlugin;

impl SamplePlugin {
    pub fn execute1(&self, _payload: &Payload, _config: &PluginConfig) -> Result<String, HooklineError> {
        Ok("1.2.1".to_string())
    }

    pub fn doing_something(
        &self,
        _payload: &Payload,
        _config: &PluginConfig,
    ) -> Result<String, HooklineError> {
        Ok("1.2.3".to_string())
    }

    /// Not listed in `handlers`, so it cannot be dispatched to.
    pub fn ignoring(&self) -> &'static str {
        "This is non versioned!"
    }
}

impl VersionedPlugin for SamplePlugin {
    type Output = String;
    type Error = HooklineError;

    fn handlers() -> Vec<VersionedHandler<Self, String, HooklineError>> {
        vec![
            plugin_version("1.2.1").apply(SamplePlugin::execute1),
            plugin_version("1.2.3").apply(SamplePlugin::doing_something),
        ]
    }
}

/// `1.0.0` answers "A", `2.0.0` answers "B".
#[derive(Debug, Default)]
pub struct LetterPlugin;

impl LetterPlugin {
    fn h1(&self, _: &Payload, _: &PluginConfig) -> Result<String, HooklineError> {
        Ok("A".to_string())
    }

    fn h2(&self, _: &Payload, _: &PluginConfig) -> Result<String, HooklineError> {
        Ok("B".to_string())
    }
}

impl VersionedPlugin for LetterPlugin {
    type Output = String;
    type Error = HooklineError;

    fn handlers() -> Vec<VersionedHandler<Self, String, HooklineError>> {
        vec![
            plugin_version("1.0.0").named("h1").apply(LetterPlugin::h1),
            plugin_version("2.0.0").named("h2").apply(LetterPlugin::h2),
        ]
    }
}

/// Two handlers claiming `1.0.0`.
#[derive(Debug, Default)]
pub struct DuplicatePlugin;

impl VersionedPlugin for DuplicatePlugin {
    type Output = String;
    type Error = HooklineError;

    fn handlers() -> Vec<VersionedHandler<Self, String, HooklineError>> {
        vec![
            plugin_version("1.0.0")
                .named("first")
                .apply(|_: &Self, _: &Payload, _: &PluginConfig| Ok("first".to_string())),
            plugin_version("1.0.0")
                .named("second")
                .apply(|_: &Self, _: &Payload, _: &PluginConfig| Ok("second".to_string())),
        ]
    }
}

/// One valid handler and one tagged `not-a-version`.
#[derive(Debug, Default)]
pub struct InvalidPlugin;

impl VersionedPlugin for InvalidPlugin {
    type Output = String;
    type Error = HooklineError;

    fn handlers() -> Vec<VersionedHandler<Self, String, HooklineError>> {
        vec![
            plugin_version("1.0.0")
                .named("fine")
                .apply(|_: &Self, _: &Payload, _: &PluginConfig| Ok("fine".to_string())),
            plugin_version("not-a-version")
                .named("broken")
                .apply(|_: &Self, _: &Payload, _: &PluginConfig| Ok("broken".to_string())),
        ]
    }
}

/// Echoes what it was called with and counts calls.
///
/// `1.0.0` returns `{"payload": .., "config": ..}`. `1.1.0` fails with a
/// handler error when the payload has `"fail": true`.
#[derive(Debug, Default)]
pub struct RecordingPlugin {
    calls: AtomicUsize,
}

impl RecordingPlugin {
    /// Number of handler invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, payload: &Payload, config: &PluginConfig) -> Result<Value, HooklineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "payload": payload, "config": config }))
    }

    fn strict(&self, payload: &Payload, config: &PluginConfig) -> Result<Value, HooklineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if payload.get("fail") == Some(&Value::Bool(true)) {
            return Err(HooklineError::handler("payload requested failure"));
        }
        Ok(json!({ "payload": payload, "config": config, "strict": true }))
    }
}

impl VersionedPlugin for RecordingPlugin {
    type Output = Value;
    type Error = HooklineError;

    fn handlers() -> Vec<VersionedHandler<Self, Value, HooklineError>> {
        vec![
            plugin_version("1.0.0").apply(RecordingPlugin::record),
            plugin_version("1.1.0").apply(RecordingPlugin::strict),
        ]
    }
}
