//! Fuzz target: `KnobEngine` command stream
//!
//! Each 9-byte chunk is an opcode plus a little-endian `f64` operand
//! (any bit pattern, NaN and infinities included).  The engine must never
//! panic, and once both bounds are numbers they must be ordered.
//!
//! cargo fuzz run fuzz_engine_commands

#![no_main]

use knobs::config::KnobConfig;
use knobs::engine::{KnobCommand, KnobEngine, KnobEvent, Mailbox};
use libfuzzer_sys::fuzz_target;

fn decode(op: u8, v: f64) -> KnobCommand {
    match op % 12 {
        0 => KnobCommand::SetMin(v),
        1 => KnobCommand::SetMax(v),
        2 => KnobCommand::SetRange { min: v, max: -v },
        3 => KnobCommand::SetCurrent(v),
        4 => KnobCommand::SetTarget(v),
        5 => KnobCommand::CommitTarget(v),
        6 => KnobCommand::PointerAngle(v),
        7 => KnobCommand::PointerPosition { dx: v, dy: v * 0.5 },
        8 => KnobCommand::GestureEnd,
        9 => KnobCommand::SetDecimals(v.to_bits() as u8),
        10 => KnobCommand::SetDisabled(v.is_sign_negative()),
        _ => KnobCommand::SetDragDisabled(v > 0.0),
    }
}

fuzz_target!(|data: &[u8]| {
    let deferred = data.first().is_some_and(|b| b & 0x80 != 0);
    let mut knob = KnobEngine::new(KnobConfig {
        deferred_init: Some(deferred),
        ..KnobConfig::default()
    });

    // Re-post a bounded number of commits from inside the handler.
    let mut echoes = 0u8;
    knob.subscribe(move |e: &KnobEvent, mb: &mut Mailbox| {
        if echoes < 8 {
            echoes += 1;
            mb.post(KnobCommand::SetCurrent(e.value()));
        }
    });

    for chunk in data.chunks_exact(9) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&chunk[1..]);
        knob.submit(decode(chunk[0], f64::from_le_bytes(raw)));

        let (min, max) = (knob.min(), knob.max());
        if !min.is_nan() && !max.is_nan() {
            assert!(min <= max, "bounds crossed: [{min}, {max}]");
        }
        let _ = knob.view();
    }

    if deferred {
        knob.mark_ready();
    }
    let _ = knob.view();
});
