// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the registry, configuration, and host crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The payload object handed to a handler on every dispatch.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// The configuration object handed to a handler alongside the payload.
pub type PluginConfig = serde_json::Map<String, serde_json::Value>;

/// Verbosity accepted by the host's tracing setup.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}
