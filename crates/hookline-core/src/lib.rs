// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Hookline versioned plugin framework.
//!
//! This crate provides the error taxonomy and the payload/config types shared
//! by the registry, configuration, and host crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HooklineError;
pub use types::{LogLevel, Payload, PluginConfig};
