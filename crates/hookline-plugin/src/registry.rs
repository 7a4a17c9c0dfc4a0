// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handler table built once per plugin instance.
//!
//! The `HandlerTable` maps version labels to tagged handlers. It is populated
//! by [`HandlerTable::build`] and never mutated afterward.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use hookline_core::HooklineError;
use tracing::{debug, trace};

use crate::tag::VersionedHandler;

/// Exact-match lookup from version label to handler.
pub struct HandlerTable<P, R, E> {
    entries: HashMap<String, VersionedHandler<P, R, E>>,
}

impl<P, R, E> HandlerTable<P, R, E> {
    /// Build a table from a set of tagged handlers.
    ///
    /// Every label must parse as semver and labels must be unique. All labels
    /// are checked for syntax before duplicates are looked for, so the error
    /// kind reported does not depend on the order handlers are listed in.
    pub fn build<I>(handlers: I) -> Result<Self, HooklineError>
    where
        I: IntoIterator<Item = VersionedHandler<P, R, E>>,
    {
        let handlers: Vec<VersionedHandler<P, R, E>> = handlers.into_iter().collect();

        for handler in &handlers {
            semver::Version::parse(handler.version()).map_err(|source| {
                HooklineError::InvalidVersionFormat {
                    version: handler.version().to_string(),
                    handler: handler.name().to_string(),
                    source,
                }
            })?;
        }

        let mut entries = HashMap::with_capacity(handlers.len());
        for handler in handlers {
            match entries.entry(handler.version().to_string()) {
                Entry::Occupied(existing) => {
                    return Err(HooklineError::DuplicateVersion {
                        version: existing.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    trace!(version = handler.version(), handler = handler.name(), "registered handler");
                    slot.insert(handler);
                }
            }
        }

        let table = Self { entries };
        debug!(count = table.len(), versions = ?table.versions(), "built handler table");
        Ok(table)
    }

    /// Look up the handler registered under exactly `version`.
    pub fn get(&self, version: &str) -> Option<&VersionedHandler<P, R, E>> {
        self.entries.get(version)
    }

    /// Whether a handler is registered under exactly `version`.
    pub fn contains(&self, version: &str) -> bool {
        self.entries.contains_key(version)
    }

    /// All registered labels, sorted.
    pub fn versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        versions.sort_unstable();
        versions
    }

    /// Returns the number of registered handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P, R, E> fmt::Debug for HandlerTable<P, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
            .field("versions", &self.versions())
            .finish()
    }
}
