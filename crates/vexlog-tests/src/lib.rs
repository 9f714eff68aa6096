//! Reference encoders used to build test fixtures.
//!
//! These mirror what the robot-side logger writes. They are deliberately
//! kept out of `vexlog-wire`, which only decodes.

/// Encode `value` as a base-128 varint, low group first.
#[must_use]
pub fn encode_varuint(mut value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(5);
    loop {
        // Take the lowest 7 bits
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return out;
        }
        // More bytes to come: set the continuation bit
        out.push(byte | 0x80);
    }
}

/// Zig-zag encode `value` and write it as a varint.
#[must_use]
pub fn encode_varint(value: i64) -> Vec<u8> {
    encode_varuint(zigzag(value))
}

/// Map signed to unsigned in the order `0, -1, 1, -2, 2, ...`.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Encode a run of coordinates the way the particle logger does: scale,
/// bias, truncate to `u16`, then delta against the previous raw value.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compress_coordinates(coords: &[f64]) -> Vec<u16> {
    let mut last = 0u16;
    coords
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let raw = (c * vexlog_wire::coords::SCALE + vexlog_wire::coords::BIAS) as u16;
            let delta = if i == 0 { raw } else { raw.wrapping_sub(last) };
            last = raw;
            delta
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoder_wire_examples() {
        assert_eq!(encode_varuint(0), vec![0x00]);
        assert_eq!(encode_varuint(127), vec![0x7F]);
        assert_eq!(encode_varuint(300), vec![0xAC, 0x02]);
        assert_eq!(encode_varuint(16384), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn zigzag_interleaves() {
        let mapped: Vec<u64> = [0, -1, 1, -2, 2].into_iter().map(zigzag).collect();
        assert_eq!(mapped, vec![0, 1, 2, 3, 4]);
    }
}
