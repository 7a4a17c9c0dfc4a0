// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Version tags for plugin handlers.
//!
//! A tag pairs a version label with a handler without wrapping or altering
//! how the handler is invoked. Labels are stored verbatim; syntax is checked
//! later, when the handler table is built.

use std::fmt;

use hookline_core::{Payload, PluginConfig};

/// Boxed handler body bound to a plugin value of type `P`.
type InvokeFn<P, R, E> = dyn Fn(&P, &Payload, &PluginConfig) -> Result<R, E> + Send + Sync;

/// Start tagging a handler with `version`.
///
/// ```
/// use hookline_core::{HooklineError, Payload, PluginConfig};
/// use hookline_plugin::plugin_version;
///
/// struct Echo;
///
/// impl Echo {
///     fn run(&self, _payload: &Payload, _config: &PluginConfig) -> Result<String, HooklineError> {
///         Ok("1.0.0".into())
///     }
/// }
///
/// let handler = plugin_version("1.0.0").apply(Echo::run);
/// assert_eq!(handler.version(), "1.0.0");
/// ```
pub fn plugin_version(version: impl Into<String>) -> VersionTag {
    VersionTag {
        version: version.into(),
        name: None,
    }
}

/// A version label waiting to be attached to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    version: String,
    name: Option<String>,
}

impl VersionTag {
    /// Override the handler identity reported in diagnostics.
    ///
    /// Without it the Rust type name of the handler is used.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The label this tag will record.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Attach this tag to `handler`.
    pub fn apply<P, R, E, F>(self, handler: F) -> VersionedHandler<P, R, E>
    where
        F: Fn(&P, &Payload, &PluginConfig) -> Result<R, E> + Send + Sync + 'static,
    {
        let name = self
            .name
            .unwrap_or_else(|| std::any::type_name::<F>().to_string());
        VersionedHandler {
            version: self.version,
            name,
            invoke: Box::new(handler),
        }
    }
}

/// A handler paired with the version label it was tagged with.
pub struct VersionedHandler<P, R, E> {
    version: String,
    name: String,
    invoke: Box<InvokeFn<P, R, E>>,
}

impl<P, R, E> VersionedHandler<P, R, E> {
    /// The label recorded at tag time, exactly as given.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Identity of the handler, used in error messages and traces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the handler with the payload and config untouched.
    pub fn call(&self, plugin: &P, payload: &Payload, config: &PluginConfig) -> Result<R, E> {
        (self.invoke)(plugin, payload, config)
    }
}

impl<P, R, E> fmt::Debug for VersionedHandler<P, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionedHandler")
            .field("version", &self.version)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
