//! Fuzz target: `gradient::reorder_with`
//!
//! Decodes arbitrary bytes into `(offset, colour)` stops and checks that
//! reordering never panics, never returns an empty ramp, and only emits
//! offsets inside `[0, 1]`.
//!
//! cargo fuzz run fuzz_gradient_reorder

#![no_main]

use knobs::color::Rgba;
use knobs::gradient::{GradientStop, ReorderOptions, TRANSPARENT_STOPS, reorder_with};
use libfuzzer_sys::fuzz_target;

const STOP_BYTES: usize = 12;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };

    let stops: Vec<GradientStop> = rest
        .chunks_exact(STOP_BYTES)
        .map(|c| {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&c[..8]);
            GradientStop {
                offset: f64::from_le_bytes(raw),
                color: Rgba::new(c[8], c[9], c[10], c[11]),
            }
        })
        .collect();

    let fallback: &[GradientStop] = if flags & 0x02 != 0 { &TRANSPARENT_STOPS } else { &[] };
    let options = ReorderOptions {
        sort_output: flags & 0x01 != 0,
    };
    let out = reorder_with(&stops, fallback, options);

    assert!(out.len() >= 2, "reordered ramp must have both ends");
    for s in &out {
        assert!((0.0..=1.0).contains(&s.offset), "offset {} off the ramp", s.offset);
    }
    if options.sort_output {
        assert!(out.windows(2).all(|w| w[0].offset <= w[1].offset));
    }
});
