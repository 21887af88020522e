//! Property tests for the engine invariants and the gradient reorderer.

use std::cell::Cell;
use std::rc::Rc;

use knobs::color::Rgba;
use knobs::control::angle::{AngleMapping, rotate_into_arc};
use knobs::engine::{KnobEngine, KnobEvent, Mailbox};
use knobs::gradient::{GradientStop, ReorderOptions, reorder, reorder_with};
use proptest::prelude::*;

// ── Engine range invariant ────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Min(f64),
    Max(f64),
    Range(f64, f64),
    Current(f64),
    Target(f64),
    Pointer(f64),
    Release,
}

fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0e4f64..1.0e4,
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
        1 => Just(f64::MAX),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_value().prop_map(Op::Min),
        arb_value().prop_map(Op::Max),
        (arb_value(), arb_value()).prop_map(|(a, b)| Op::Range(a, b)),
        arb_value().prop_map(Op::Current),
        arb_value().prop_map(Op::Target),
        (-720.0f64..720.0).prop_map(Op::Pointer),
        Just(Op::Release),
    ]
}

fn counting(engine: &mut KnobEngine) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    engine.subscribe(move |_: &KnobEvent, _: &mut Mailbox| c.set(c.get() + 1));
    count
}

proptest! {
    #[test]
    fn engine_keeps_values_inside_the_range(ops in proptest::collection::vec(arb_op(), 1..48)) {
        let mut k = KnobEngine::default();
        for op in ops {
            match op {
                Op::Min(v) => k.set_min(v),
                Op::Max(v) => k.set_max(v),
                Op::Range(a, b) => k.set_range(a, b),
                Op::Current(v) => k.set_current(v),
                Op::Target(v) => k.set_target(v),
                Op::Pointer(theta) => k.on_pointer_angle(theta),
                Op::Release => k.on_gesture_end(),
            }
            prop_assert!(k.min() <= k.max());
            prop_assert!(k.min() <= k.current() && k.current() <= k.max());
            prop_assert!(k.min() <= k.target() && k.target() <= k.max());
            let v = k.view();
            prop_assert!(v.indicator_angle.is_finite());
            prop_assert!(v.bar_length.is_finite());
        }
    }

    #[test]
    fn value_setters_emit_exactly_once(v in arb_value(), target in arb_value()) {
        let mut k = KnobEngine::default();
        k.set_target(target);
        let count = counting(&mut k);
        k.set_current(v);
        prop_assert_eq!(count.get(), 1);
        k.set_target(v);
        prop_assert_eq!(count.get(), 2);
    }

    #[test]
    fn bound_changes_emit_at_most_twice(a in arb_value(), b in arb_value()) {
        let mut k = KnobEngine::default();
        k.set_current(25.0);
        k.set_target(75.0);
        let count = counting(&mut k);
        k.set_range(a, b);
        prop_assert!(count.get() <= 2);
    }

    #[test]
    fn indicator_stays_on_the_arc(lo in -1.0e6f64..1.0e6, span in 1.0e-3f64..1.0e6, f in 0.0f64..=1.0) {
        let m = AngleMapping::new(lo, lo + span);
        let angle = m.indicator_angle(lo + span * f);
        prop_assert!((-140.0 - 1e-3..=140.0 + 1e-3).contains(&angle));
    }

    #[test]
    fn rotation_always_lands_on_the_arc(theta in -1.0e6f64..1.0e6) {
        let r = rotate_into_arc(theta);
        prop_assert!((0.0..=280.0).contains(&r));
    }
}

// ── Gradient reorderer ────────────────────────────────────────

fn arb_stop() -> impl Strategy<Value = GradientStop> {
    (
        prop_oneof![4 => -0.5f64..1.5, 1 => Just(0.0), 1 => Just(1.0), 1 => Just(f64::NAN)],
        any::<(u8, u8, u8, u8)>(),
    )
        .prop_map(|(offset, (r, g, b, a))| GradientStop {
            offset,
            color: Rgba::new(r, g, b, a),
        })
}

proptest! {
    #[test]
    fn reordered_offsets_are_in_unit_range(stops in proptest::collection::vec(arb_stop(), 0..12)) {
        let out = reorder(&stops);
        prop_assert!(out.len() >= 2);
        for s in &out {
            prop_assert!((0.0..=1.0).contains(&s.offset), "offset {}", s.offset);
        }
    }

    #[test]
    fn reordering_is_deterministic(stops in proptest::collection::vec(arb_stop(), 0..12)) {
        prop_assert_eq!(reorder(&stops), reorder(&stops));
    }

    #[test]
    fn sorting_only_permutes(stops in proptest::collection::vec(arb_stop(), 0..12)) {
        let plain = reorder(&stops);
        let sorted = reorder_with(&stops, &[], ReorderOptions { sort_output: true });
        prop_assert_eq!(plain.len(), sorted.len());
        prop_assert!(sorted.windows(2).all(|w| w[0].offset <= w[1].offset));
    }
}
