#![no_main]

use libfuzzer_sys::fuzz_target;
use vexlog_wire::{decode_float16, read_float16_le};

// Fuzz target: half-float decoding from raw bytes.
//
// Every pattern must decode, and the buffer reader must agree with the
// bit-pattern decoder.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        assert!(read_float16_le(data, 0).is_err());
        return;
    }
    let bits = u16::from_le_bytes([data[0], data[1]]);
    let direct = decode_float16(bits);
    let (read, len) = read_float16_le(data, 0).unwrap();
    assert_eq!(len, 2);
    assert_eq!(direct.to_bits(), read.to_bits());
    assert_eq!(direct.is_nan(), (bits & 0x7C00) == 0x7C00 && (bits & 0x03FF) != 0);
});
