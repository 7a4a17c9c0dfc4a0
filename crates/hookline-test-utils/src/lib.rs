// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Hookline integration tests.
//!
//! # Components
//!
//! - [`SamplePlugin`], [`LetterPlugin`], [`RecordingPlugin`] - plugins with known handler sets
//! - [`DuplicatePlugin`], [`InvalidPlugin`] - plugins whose construction must fail
//! - [`TestHarness`] - host built from a generated config file

pub mod harness;
pub mod plugins;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use plugins::{DuplicatePlugin, InvalidPlugin, LetterPlugin, RecordingPlugin, SamplePlugin};
