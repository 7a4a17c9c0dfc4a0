// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Versioned plugin handlers with exact-match dispatch.
//!
//! Plugin authors ship one handler per supported version; hosts pick one by
//! target version when constructing the plugin. This crate re-exports the
//! core, registry, and configuration crates and adds the host-side pieces:
//! configuration-driven instantiation and tracing setup.
//!
//! ```no_run
//! use hookline::{Host, init_tracing, load_and_validate, render_errors};
//!
//! let config = match load_and_validate() {
//!     Ok(config) => config,
//!     Err(errors) => {
//!         render_errors(&errors);
//!         std::process::exit(1);
//!     }
//! };
//! init_tracing(&config.host).expect("tracing");
//! let host = Host::new(config);
//! # let _ = host;
//! ```

pub mod host;
pub mod telemetry;

pub use host::{Host, HostedPlugin};
pub use telemetry::init_tracing;

pub use hookline_config::{
    ConfigError, HooklineConfig, HostConfig, PluginSettings, load_and_validate,
    load_and_validate_path, load_and_validate_str, render_errors,
};
pub use hookline_core::{HooklineError, LogLevel, Payload, PluginConfig};
pub use hookline_plugin::{
    HandlerTable, HooklinePlugin, VersionTag, VersionedHandler, VersionedPlugin, plugin_version,
};
