//! Pointer gestures: samples drive the target, release commits it.

use knobs::config::KnobConfig;
use knobs::control::angle::theta_for_angle;
use knobs::engine::{KnobEngine, KnobEvent, KnobEventKind};

use super::mock_observer::EventLog;

use KnobEventKind::{Adjusting, TargetSet};

fn knob() -> (KnobEngine, EventLog) {
    let mut k = KnobEngine::default();
    let log = EventLog::attach(&mut k);
    (k, log)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn drag_and_release_commits_the_target() {
    let (mut k, log) = knob();
    k.on_pointer_angle(270.0);
    assert!(close(k.target(), 50.0));
    k.on_gesture_end();

    assert_eq!(log.kinds(), vec![Adjusting, TargetSet]);
    let committed = log.values()[1];
    assert!(close(committed, 50.0));
}

#[test]
fn every_sample_emits_but_only_release_commits() {
    let (mut k, log) = knob();
    for theta in [200.0, 250.0, 270.0, 340.0] {
        k.on_pointer_angle(theta);
    }
    assert_eq!(log.kinds(), vec![Adjusting; 4]);
    k.on_gesture_end();
    assert_eq!(log.len(), 5);
    assert_eq!(log.kinds()[4], TargetSet);
}

#[test]
fn pointer_position_feeds_the_same_mapping() {
    let (mut k, _log) = knob();
    // Straight up from the centre (screen y grows downward).
    k.on_pointer_position(0.0, -25.0);
    assert!(close(k.target(), 50.0));
    // Lower left: arc start.
    k.on_pointer_position(-1.0, 1.19175359259421);
    assert!(k.target() < 0.5);
}

#[test]
fn indicator_round_trips_through_a_gesture() {
    let (mut k, _log) = knob();
    k.set_range(-20.0, 20.0);
    k.set_target(7.5);
    let theta = theta_for_angle(k.indicator_angle());
    k.set_target(0.0);
    k.on_pointer_angle(theta);
    assert!((k.target() - 7.5).abs() < 1e-9);
}

#[test]
fn dead_zone_snaps_to_the_nearest_end() {
    let (mut k, _log) = knob();
    k.on_pointer_angle(85.0);
    assert!(close(k.target(), 100.0));
    k.on_pointer_angle(100.0);
    assert_eq!(k.target(), 0.0);
}

#[test]
fn release_without_samples_is_ignored() {
    let (mut k, log) = knob();
    k.on_gesture_end();
    assert!(log.is_empty());
}

#[test]
fn disabled_knob_ignores_pointer_input() {
    let (mut k, log) = knob();
    k.set_disabled(true);
    k.on_pointer_angle(270.0);
    k.on_pointer_angle(300.0);
    k.on_gesture_end();
    assert!(log.is_empty());
    assert_eq!(k.target(), 0.0);
    assert!(!k.view().interactive);
}

#[test]
fn drag_disabled_knob_ignores_pointer_input() {
    let mut k = KnobEngine::new(KnobConfig {
        drag_disabled: Some(true),
        ..KnobConfig::default()
    });
    let log = EventLog::attach(&mut k);
    k.on_pointer_position(0.0, -1.0);
    k.on_gesture_end();
    assert!(log.is_empty());

    // Programmatic input is unaffected.
    k.set_target(10.0);
    assert_eq!(log.kinds(), vec![Adjusting]);
}

#[test]
fn disabling_mid_gesture_voids_it() {
    let (mut k, log) = knob();
    k.on_pointer_angle(270.0);
    k.set_disabled(true);
    k.set_disabled(false);
    k.on_pointer_angle(200.0);
    k.on_gesture_end();
    assert_eq!(log.kinds(), vec![Adjusting], "voided gesture never commits");

    // The next gesture starts clean.
    log.clear();
    k.on_pointer_angle(200.0);
    k.on_gesture_end();
    assert_eq!(log.kinds(), vec![Adjusting, TargetSet]);
}

#[test]
fn unusable_samples_leave_the_target_alone() {
    let (mut k, log) = knob();
    k.set_target(30.0);
    log.clear();
    k.on_pointer_position(0.0, 0.0);
    k.on_pointer_angle(f64::NAN);
    k.on_pointer_angle(f64::INFINITY);
    assert!(log.is_empty());
    assert_eq!(k.target(), 30.0);
}

#[test]
fn commit_listener_sees_only_released_targets() {
    let mut k = KnobEngine::new(KnobConfig {
        label: Some("gain".into()),
        ..KnobConfig::default()
    });
    let commits = EventLog::attach_kind(&mut k, TargetSet);
    k.on_pointer_angle(200.0);
    k.on_pointer_angle(270.0);
    assert!(commits.is_empty());
    k.on_gesture_end();

    let events = commits.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        KnobEvent::TargetSet { source, target } => {
            assert_eq!(source.label.as_deref(), Some("gain"));
            assert!(close(*target, 50.0));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
