// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for handler registration and version-resolving dispatch.

use std::collections::BTreeSet;

use hookline_core::{HooklineError, Payload, PluginConfig};
use hookline_plugin::{HandlerTable, HooklinePlugin, VersionedHandler, plugin_version};
use hookline_test_utils::{
    DuplicatePlugin, InvalidPlugin, LetterPlugin, RecordingPlugin, SamplePlugin,
};
use proptest::prelude::*;
use serde_json::json;

fn start<P: hookline_plugin::VersionedPlugin>(
    plugin: &HooklinePlugin<P>,
) -> Result<P::Output, P::Error> {
    plugin.start(&Payload::new(), &PluginConfig::new())
}

#[test]
fn target_one_dispatches_to_first_handler() {
    let plugin = HooklinePlugin::new(LetterPlugin, "1.0.0").unwrap();
    assert_eq!(start(&plugin).unwrap(), "A");
    assert_eq!(plugin.handler_name(), Some("h1"));
}

#[test]
fn missing_target_raises_unresolved() {
    let plugin = HooklinePlugin::new(LetterPlugin, "3.0.0").unwrap();
    match start(&plugin).unwrap_err() {
        HooklineError::UnresolvedVersion {
            requested,
            available,
        } => {
            assert_eq!(requested, "3.0.0");
            assert_eq!(available, vec!["1.0.0", "2.0.0"]);
        }
        other => panic!("expected UnresolvedVersion, got {other:?}"),
    }
}

#[test]
fn duplicate_labels_fail_construction() {
    let err = HooklinePlugin::new(DuplicatePlugin, "1.0.0").unwrap_err();
    assert!(matches!(err, HooklineError::DuplicateVersion { ref version } if version == "1.0.0"));
}

#[test]
fn duplicate_labels_fail_for_any_target() {
    for target in ["1.0.0", "2.0.0", "garbage"] {
        assert!(matches!(
            HooklinePlugin::new(DuplicatePlugin, target),
            Err(HooklineError::DuplicateVersion { .. })
        ));
    }
}

#[test]
fn invalid_label_fails_construction() {
    match HooklinePlugin::new(InvalidPlugin, "1.0.0").unwrap_err() {
        HooklineError::InvalidVersionFormat {
            version, handler, ..
        } => {
            assert_eq!(version, "not-a-version");
            assert_eq!(handler, "broken");
        }
        other => panic!("expected InvalidVersionFormat, got {other:?}"),
    }
}

#[test]
fn sample_plugin_registers_both_patches() {
    let plugin = HooklinePlugin::new(SamplePlugin, "1.2.3").unwrap();
    assert!(plugin.table().contains("1.2.1"));
    assert!(plugin.table().contains("1.2.3"));
    assert_eq!(plugin.table().len(), 2);
}

#[test]
fn sample_plugin_version_matching() {
    let p121 = HooklinePlugin::new(SamplePlugin, "1.2.1").unwrap();
    let p123 = HooklinePlugin::new(SamplePlugin, "1.2.3").unwrap();
    let p201 = HooklinePlugin::new(SamplePlugin, "2.0.1").unwrap();

    assert_eq!(start(&p121).unwrap(), "1.2.1");
    assert_eq!(start(&p123).unwrap(), "1.2.3");
    assert!(matches!(
        start(&p201),
        Err(HooklineError::UnresolvedVersion { .. })
    ));
}

#[test]
fn untagged_methods_are_invisible() {
    let plugin = HooklinePlugin::new(SamplePlugin, "1.2.1").unwrap();
    assert_eq!(plugin.plugin().ignoring(), "This is non versioned!");
    assert!(
        plugin
            .table()
            .versions()
            .iter()
            .all(|v| *v == "1.2.1" || *v == "1.2.3")
    );
}

#[test]
fn exact_match_rejects_near_misses() {
    for target in ["1.2", "1.2.3-rc1", "1.2.3+build", "01.2.3"] {
        let plugin = HooklinePlugin::new(SamplePlugin, target).unwrap();
        assert!(
            matches!(start(&plugin), Err(HooklineError::UnresolvedVersion { .. })),
            "{target} must not resolve"
        );
    }
}

#[test]
fn payload_and_config_are_forwarded_verbatim() {
    let plugin = HooklinePlugin::new(RecordingPlugin::default(), "1.0.0").unwrap();
    let mut payload = Payload::new();
    payload.insert("event".into(), json!({"kind": "push", "refs": ["main"]}));
    let mut config = PluginConfig::new();
    config.insert("token".into(), json!("abc"));

    let out = plugin.start(&payload, &config).unwrap();
    assert_eq!(out["payload"], serde_json::Value::Object(payload));
    assert_eq!(out["config"], serde_json::Value::Object(config));
}

#[test]
fn repeated_start_hits_the_same_handler() {
    let plugin = HooklinePlugin::new(RecordingPlugin::default(), "1.1.0").unwrap();
    let first = start(&plugin).unwrap();
    for _ in 0..4 {
        assert_eq!(start(&plugin).unwrap(), first);
    }
    assert_eq!(plugin.plugin().calls(), 5);
}

#[test]
fn handler_failure_propagates() {
    let plugin = HooklinePlugin::new(RecordingPlugin::default(), "1.1.0").unwrap();
    let mut payload = Payload::new();
    payload.insert("fail".into(), json!(true));

    let err = plugin.start(&payload, &PluginConfig::new()).unwrap_err();
    assert!(matches!(err, HooklineError::Handler { ref message, .. } if message == "payload requested failure"));
}

#[test]
fn unresolved_start_does_not_invoke_any_handler() {
    let plugin = HooklinePlugin::new(RecordingPlugin::default(), "9.0.0").unwrap();
    assert!(start(&plugin).is_err());
    assert_eq!(plugin.plugin().calls(), 0);
}

struct Unit;

fn labelled(labels: &[&str]) -> Vec<VersionedHandler<Unit, usize, HooklineError>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            plugin_version(*label).apply(move |_: &Unit, _: &Payload, _: &PluginConfig| {
                Ok::<usize, HooklineError>(i)
            })
        })
        .collect()
}

const POOL: [&str; 6] = ["0.1.0", "1.0.0", "1.0.1", "1.2.3-rc.1", "2.0.0", "2.0.0+meta"];

proptest! {
    /// The registered set and duplicate detection only depend on the label set.
    #[test]
    fn build_outcome_is_order_independent(
        labels in prop::collection::vec(prop::sample::select(POOL.to_vec()), 0..8)
            .prop_flat_map(|v| {
                let shuffled = Just(v.clone()).prop_shuffle();
                (Just(v), shuffled)
            })
    ) {
        let (original, shuffled) = labels;
        let distinct: BTreeSet<&str> = original.iter().copied().collect();
        let has_duplicate = distinct.len() != original.len();

        for order in [&original, &shuffled] {
            match HandlerTable::build(labelled(order)) {
                Ok(table) => {
                    prop_assert!(!has_duplicate);
                    let registered: BTreeSet<&str> = table.versions().into_iter().collect();
                    prop_assert_eq!(&registered, &distinct);
                }
                Err(HooklineError::DuplicateVersion { version }) => {
                    prop_assert!(has_duplicate);
                    prop_assert!(order.iter().filter(|l| **l == version).count() > 1);
                }
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }
        }
    }

    /// Only the exact registered strings resolve.
    #[test]
    fn only_registered_labels_resolve(target in "\\PC{0,12}") {
        let plugin = HooklinePlugin::new(SamplePlugin, target.clone()).unwrap();
        let resolved = start(&plugin);
        if target == "1.2.1" || target == "1.2.3" {
            prop_assert_eq!(resolved.unwrap(), target);
        } else {
            let is_unresolved = matches!(resolved, Err(HooklineError::UnresolvedVersion { .. }));
            prop_assert!(is_unresolved);
        }
    }
}
