//! Deferred initialization: commands queue until `mark_ready`, then replay
//! in arrival order with their full event side effects.

use knobs::config::KnobConfig;
use knobs::engine::{KnobEngine, KnobEventKind, Lifecycle};

use super::mock_observer::EventLog;

fn deferred() -> (KnobEngine, EventLog) {
    let mut k = KnobEngine::deferred(KnobConfig::default());
    let log = EventLog::attach(&mut k);
    (k, log)
}

#[test]
fn queued_values_replay_in_order() {
    let (mut k, log) = deferred();
    k.set_current(10.0);
    k.set_current(20.0);
    k.set_current(30.0);

    assert_eq!(k.lifecycle(), Lifecycle::Initializing);
    assert_eq!(k.pending_len(), 3);
    assert_eq!(k.current(), 0.0, "nothing applied before ready");
    assert!(log.is_empty());

    assert_eq!(k.mark_ready(), 3);
    assert_eq!(log.values(), vec![10.0, 20.0, 30.0]);
    assert_eq!(log.kinds(), vec![KnobEventKind::Adjusting; 3]);
    assert_eq!(k.current(), 30.0);
    assert_eq!(k.pending_len(), 0);
}

#[test]
fn replay_clamps_against_queued_range() {
    let (mut k, log) = deferred();
    k.set_range(10.0, 20.0);
    k.set_current(50.0);
    k.mark_ready();

    // The range cascade moves current and target to 10, then 50 clamps to 20.
    assert_eq!(log.values(), vec![10.0, 10.0, 20.0]);
    assert_eq!(k.current(), 20.0);
}

#[test]
fn config_is_applied_at_construction() {
    let k = KnobEngine::deferred(KnobConfig {
        current: Some(40.0),
        unit: Some("Hz".into()),
        ..KnobConfig::default()
    });
    assert_eq!(k.lifecycle(), Lifecycle::Initializing);
    assert_eq!(k.current(), 40.0);
    assert_eq!(k.unit(), "Hz");
}

#[test]
fn config_flag_selects_deferred_start() {
    let k = KnobEngine::new(KnobConfig {
        deferred_init: Some(true),
        ..KnobConfig::default()
    });
    assert_eq!(k.lifecycle(), Lifecycle::Initializing);
}

#[test]
fn text_entry_queues_a_commit() {
    let (mut k, log) = deferred();
    k.submit_target_text("12").unwrap();
    assert_eq!(k.target(), 0.0);
    k.mark_ready();
    assert_eq!(
        log.kinds(),
        vec![KnobEventKind::Adjusting, KnobEventKind::TargetSet]
    );
    assert_eq!(k.target(), 12.0);
}

#[test]
fn gestures_queue_like_any_other_input() {
    let (mut k, log) = deferred();
    k.on_pointer_angle(270.0);
    k.on_gesture_end();
    assert_eq!(k.pending_len(), 2);
    k.mark_ready();
    assert_eq!(
        log.kinds(),
        vec![KnobEventKind::Adjusting, KnobEventKind::TargetSet]
    );
    assert!((k.target() - 50.0).abs() < 1e-9);
}

#[test]
fn ready_engine_applies_immediately() {
    let (mut k, log) = deferred();
    assert_eq!(k.mark_ready(), 0);
    k.set_current(5.0);
    assert_eq!(k.pending_len(), 0);
    assert_eq!(log.len(), 1);
    assert_eq!(k.current(), 5.0);
}
