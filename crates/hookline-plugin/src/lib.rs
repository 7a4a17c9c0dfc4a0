// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Version tags, handler registry, and version-resolving dispatch.
//!
//! A plugin author tags each handler with the version it implements and lists
//! the tagged handlers in [`VersionedPlugin::handlers`]. A host wraps a plugin
//! value in [`HooklinePlugin`] with the version it wants; the handler table is
//! built once at that point and `start` dispatches by exact label match.

pub mod plugin;
pub mod registry;
pub mod tag;

pub use plugin::{HooklinePlugin, VersionedPlugin};
pub use registry::HandlerTable;
pub use tag::{plugin_version, VersionTag, VersionedHandler};
