// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin instances with a fixed target version.
//!
//! A plugin author implements [`VersionedPlugin`] to list its tagged
//! handlers. A host wraps a plugin value in [`HooklinePlugin`] together with
//! the version it wants; `start` then dispatches to the handler registered
//! under exactly that version.

use std::fmt;

use hookline_core::{HooklineError, Payload, PluginConfig};
use tracing::debug;

use crate::registry::HandlerTable;
use crate::tag::VersionedHandler;

/// A plugin type that ships one handler per supported version.
///
/// ```
/// use hookline_core::{HooklineError, Payload, PluginConfig};
/// use hookline_plugin::{plugin_version, HooklinePlugin, VersionedHandler, VersionedPlugin};
///
/// struct Greeter;
///
/// impl Greeter {
///     fn v1(&self, _: &Payload, _: &PluginConfig) -> Result<String, HooklineError> {
///         Ok("hello".into())
///     }
///
///     fn v2(&self, _: &Payload, _: &PluginConfig) -> Result<String, HooklineError> {
///         Ok("hello, world".into())
///     }
/// }
///
/// impl VersionedPlugin for Greeter {
///     type Output = String;
///     type Error = HooklineError;
///
///     fn handlers() -> Vec<VersionedHandler<Self, String, HooklineError>> {
///         vec![
///             plugin_version("1.0.0").apply(Greeter::v1),
///             plugin_version("2.0.0").apply(Greeter::v2),
///         ]
///     }
/// }
///
/// let plugin = HooklinePlugin::new(Greeter, "2.0.0")?;
/// assert_eq!(plugin.start(&Payload::new(), &PluginConfig::new())?, "hello, world");
/// # Ok::<(), HooklineError>(())
/// ```
pub trait VersionedPlugin: Sized + 'static {
    /// Value produced by every handler.
    type Output;

    /// Error produced by handlers. Unresolved targets are converted into it.
    type Error: From<HooklineError>;

    /// Every tagged handler this plugin provides.
    ///
    /// Methods left out of this list are invisible to dispatch.
    fn handlers() -> Vec<VersionedHandler<Self, Self::Output, Self::Error>>;
}

/// A plugin value bound to the handler table and the target version chosen
/// by the host.
pub struct HooklinePlugin<P: VersionedPlugin> {
    plugin: P,
    target_version: String,
    table: HandlerTable<P, P::Output, P::Error>,
}

impl<P: VersionedPlugin> HooklinePlugin<P> {
    /// Build the handler table for `plugin` and fix the target version.
    ///
    /// The target does not need to match a registered handler yet; that is
    /// only checked when `start` is called.
    pub fn new(plugin: P, target_version: impl Into<String>) -> Result<Self, HooklineError> {
        let table = HandlerTable::build(P::handlers())?;
        Ok(Self {
            plugin,
            target_version: target_version.into(),
            table,
        })
    }

    /// Dispatch to the handler registered under the target version.
    ///
    /// The payload and config reach the handler as given, and whatever the
    /// handler returns, success or failure, is returned unchanged.
    pub fn start(&self, payload: &Payload, config: &PluginConfig) -> Result<P::Output, P::Error> {
        let handler = self.resolve()?;
        debug!(
            target_version = %self.target_version,
            handler = handler.name(),
            "dispatching to versioned handler"
        );
        handler.call(&self.plugin, payload, config)
    }

    /// The version label requested at construction.
    pub fn target_version(&self) -> &str {
        &self.target_version
    }

    /// Labels of every registered handler, sorted.
    pub fn available_versions(&self) -> Vec<&str> {
        self.table.versions()
    }

    /// Whether `start` will find a handler for the target version.
    pub fn is_resolvable(&self) -> bool {
        self.table.contains(&self.target_version)
    }

    /// Name of the handler `start` dispatches to, if one is registered.
    pub fn handler_name(&self) -> Option<&str> {
        self.table.get(&self.target_version).map(|h| h.name())
    }

    /// The wrapped plugin value.
    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    /// The handler table built at construction.
    pub fn table(&self) -> &HandlerTable<P, P::Output, P::Error> {
        &self.table
    }

    fn resolve(&self) -> Result<&VersionedHandler<P, P::Output, P::Error>, HooklineError> {
        self.table
            .get(&self.target_version)
            .ok_or_else(|| HooklineError::UnresolvedVersion {
                requested: self.target_version.clone(),
                available: self.table.versions().into_iter().map(String::from).collect(),
            })
    }
}

impl<P: VersionedPlugin> fmt::Debug for HooklinePlugin<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HooklinePlugin")
            .field("target_version", &self.target_version)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
