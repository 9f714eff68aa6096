//! Accumulation width: `Wide` versus `Truncating32`.
//!
//! The historical log reader combined varint groups with 32-bit signed
//! bitwise operations. `Truncating32` must match it byte for byte, and these
//! tests pin down exactly where it departs from the default `Wide` mode:
//!
//! - unsigned values whose 5th group exceeds `0x0F` (bits 32..35 are lost);
//! - signed values whose 32-bit pattern has bit 31 set (the arithmetic shift
//!   drags the sign bit into the magnitude).
//!
//! Everything else decodes identically in both modes.

use vexlog_tests::encode_varuint;
use vexlog_wire::{Accumulation, decode_varint_with, decode_varuint_with};

/// Model of the historical reader: 32-bit signed accumulator, wrapping shifts.
fn historical_read(buf: &[u8]) -> Option<(i32, usize)> {
    let mut value: i32 = 0;
    let mut length: u32 = 0;
    loop {
        let byte = *buf.get(length as usize)?;
        value |= i32::from(byte & 0x7F).wrapping_shl(length * 7);
        length += 1;
        if length > 5 {
            return None;
        }
        if byte & 0x80 == 0 {
            return Some((value, length as usize));
        }
    }
}

fn historical_signed(value: i32) -> i32 {
    let res = value >> 1;
    if value & 1 != 0 { !res } else { res }
}

/// Pseudo-random varint-shaped byte strings of 1 to 5 bytes.
fn varint_shaped_inputs() -> Vec<Vec<u8>> {
    let mut state: u32 = 0xC0FF_EE11;
    let mut next = || {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (state >> 16) as u8
    };

    let mut inputs = Vec::new();
    for len in 1..=5 {
        for _ in 0..500 {
            let mut bytes: Vec<u8> = (0..len).map(|_| next() | 0x80).collect();
            let last = bytes.len() - 1;
            bytes[last] &= 0x7F;
            inputs.push(bytes);
        }
    }
    // Every possible final group after four all-ones groups
    for last in 0..=0x7F {
        inputs.push(vec![0xFF, 0xFF, 0xFF, 0xFF, last]);
    }
    inputs
}

#[allow(clippy::cast_sign_loss)]
#[test]
fn truncating_matches_historical_reader() {
    for input in varint_shaped_inputs() {
        let (expected, len) = historical_read(&input).expect("input is well formed");

        let (unsigned, consumed) =
            decode_varuint_with(&input, 0, Accumulation::Truncating32).unwrap();
        assert_eq!(unsigned, u64::from(expected as u32), "unsigned {input:02X?}");
        assert_eq!(consumed, len);

        let (signed, _) = decode_varint_with(&input, 0, Accumulation::Truncating32).unwrap();
        assert_eq!(
            signed,
            i64::from(historical_signed(expected)),
            "signed {input:02X?}"
        );
    }
}

#[test]
fn modes_agree_up_to_u32_max() {
    for value in [0u64, 1, 300, 1 << 28, (1 << 31) - 1, 1 << 31, u64::from(u32::MAX)] {
        let encoded = encode_varuint(value);
        assert_eq!(
            decode_varuint_with(&encoded, 0, Accumulation::Wide),
            decode_varuint_with(&encoded, 0, Accumulation::Truncating32),
            "value {value}"
        );
    }
}

#[test]
fn signed_modes_agree_below_bit_31() {
    for raw in [0u64, 1, 2, 3, 4, 0x7FFF_FFFE, 0x7FFF_FFFF] {
        let encoded = encode_varuint(raw);
        assert_eq!(
            decode_varint_with(&encoded, 0, Accumulation::Wide),
            decode_varint_with(&encoded, 0, Accumulation::Truncating32),
            "raw {raw:#X}"
        );
    }
}

#[test]
fn modes_diverge_above_u32_max() {
    // 2^32 + 5: group 5 is 0x10, which the 32-bit reader drops entirely
    let encoded = [0x85, 0x80, 0x80, 0x80, 0x10];
    assert_eq!(
        decode_varuint_with(&encoded, 0, Accumulation::Wide),
        Ok(((1 << 32) + 5, 5))
    );
    assert_eq!(
        decode_varuint_with(&encoded, 0, Accumulation::Truncating32),
        Ok((5, 5))
    );
}

#[test]
fn signed_modes_diverge_on_bit_31() {
    // Raw 0x8000_0001: standard zig-zag is -(2^30) - 1, the old reader
    // shifts the sign bit in and lands on 2^30 - 1
    let encoded = encode_varuint(0x8000_0001);
    assert_eq!(
        decode_varint_with(&encoded, 0, Accumulation::Wide),
        Ok((-(1 << 30) - 1, 5))
    );
    assert_eq!(
        decode_varint_with(&encoded, 0, Accumulation::Truncating32),
        Ok(((1 << 30) - 1, 5))
    );
}
