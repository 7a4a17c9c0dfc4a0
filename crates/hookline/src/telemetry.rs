// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracing subscriber setup for host processes.

use hookline_config::HostConfig;
use hookline_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Crates whose events follow the configured level; everything else logs at `warn`.
const HOOKLINE_TARGETS: [&str; 4] = ["hookline", "hookline_core", "hookline_plugin", "hookline_config"];

/// Default filter directives for `level`.
pub fn default_directives(level: LogLevel) -> String {
    let mut directives: Vec<String> = HOOKLINE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.push("warn".to_string());
    directives.join(",")
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already set.
pub fn init_tracing(host: &HostConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(host.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(host.log_target)
        .with_thread_names(false)
        .finish()
        .try_init()
}
