#![no_main]

use libfuzzer_sys::fuzz_target;
use vexlog_wire::{Accumulation, decode_varuint_with};

// Fuzz target: decode_varuint in both accumulation modes.
//
// Catches bugs in:
// - VarIntTooLong (>5 continuation bytes)
// - Zero-length input
// - Truncated continuation runs
// - Width disagreement below u32::MAX
fuzz_target!(|data: &[u8]| {
    let wide = decode_varuint_with(data, 0, Accumulation::Wide);
    let narrow = decode_varuint_with(data, 0, Accumulation::Truncating32);

    match (wide, narrow) {
        (Ok((w, wl)), Ok((n, nl))) => {
            assert_eq!(wl, nl);
            assert!((1..=5).contains(&wl));
            assert!(w < (1 << 35));
            assert_eq!(w & 0xFFFF_FFFF, n);
        }
        (Err(we), Err(ne)) => assert_eq!(we, ne),
        (w, n) => panic!("modes disagree on success: {w:?} vs {n:?}"),
    }
});
