// SPDX-FileCopyrightText: 2026 Hookline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests: config file on disk -> host -> plugin dispatch.

use hookline::{HooklineError, LogLevel, Payload};
use hookline_test_utils::{DuplicatePlugin, LetterPlugin, RecordingPlugin, SamplePlugin, TestHarness};
use serde_json::json;
use tracing_test::traced_test;

#[test]
fn configured_target_selects_handler() {
    let harness = TestHarness::builder()
        .with_plugin("letters", "2.0.0")
        .with_plugin("sample", "1.2.1")
        .build()
        .unwrap();

    let letters = harness.host().instantiate("letters", LetterPlugin).unwrap();
    assert_eq!(letters.start(&Payload::new()).unwrap(), "B");

    let sample = harness.host().instantiate("sample", SamplePlugin).unwrap();
    assert_eq!(sample.start(&Payload::new()).unwrap(), "1.2.1");
}

#[test]
fn configured_config_object_is_passed_through() {
    let harness = TestHarness::builder()
        .with_plugin("recorder", "1.0.0")
        .with_plugin_config("recorder", "retries", json!(3))
        .with_plugin_config("recorder", "limits", json!({"burst": 10}))
        .build()
        .unwrap();

    let recorder = harness
        .host()
        .instantiate("recorder", RecordingPlugin::default())
        .unwrap();
    let mut payload = Payload::new();
    payload.insert("id".into(), json!("evt-1"));

    let out = recorder.start(&payload).unwrap();
    assert_eq!(out["payload"]["id"], json!("evt-1"));
    assert_eq!(out["config"]["retries"], json!(3));
    assert_eq!(out["config"]["limits"]["burst"], json!(10));
    assert_eq!(recorder.instance().plugin().calls(), 1);
}

#[test]
fn log_level_round_trips_through_file() {
    let harness = TestHarness::builder().with_log_level("debug").build().unwrap();
    assert_eq!(harness.host().config().host.log_level(), LogLevel::Debug);
    assert!(harness.config_path().exists());
}

#[test]
fn invalid_target_in_file_is_rejected_by_validation() {
    let err = TestHarness::builder()
        .with_plugin("sample", "1.2")
        .build()
        .err()
        .expect("1.2 is not a full semantic version");
    assert!(matches!(err, HooklineError::Config(ref m) if m.contains("plugins.sample.target_version")));
}

#[test]
fn registry_errors_surface_through_host() {
    let harness = TestHarness::builder().with_plugin("dup", "1.0.0").build().unwrap();
    let err = harness.host().instantiate("dup", DuplicatePlugin).unwrap_err();
    assert!(matches!(err, HooklineError::DuplicateVersion { .. }));
}

#[traced_test]
#[test]
fn unresolvable_target_is_warned_about() {
    let harness = TestHarness::builder().with_plugin("letters", "3.0.0").build().unwrap();
    let letters = harness.host().instantiate("letters", LetterPlugin).unwrap();

    assert!(logs_contain("plugin has no handler for configured target version"));
    assert!(matches!(
        letters.start(&Payload::new()),
        Err(HooklineError::UnresolvedVersion { .. })
    ));
}
