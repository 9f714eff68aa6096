use crate::error::WireError;

/// Maximum number of bytes a varint may occupy in the log stream.
/// 5 groups of 7 bits = 35 bits, enough for any `u32`.
pub const MAX_VARINT_BYTES: usize = 5;

/// How 7-bit groups are combined into the decoded value.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────────┐
/// │ Mode         │ Behavior                                             │
/// ├──────────────┼──────────────────────────────────────────────────────┤
/// │ Wide         │ 64-bit accumulator. All 35 payload bits survive.     │
/// │ Truncating32 │ 32-bit accumulator. Group 5 keeps only its low 4     │
/// │              │ bits, and bit 31 acts as a sign bit for zig-zag.     │
/// └──────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// `Truncating32` reproduces the historical log reader byte for byte. Only
/// 5-byte encodings whose last group exceeds `0x0F`, or signed values with
/// bit 31 set, decode differently between the two modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accumulation {
    /// Lossless 64-bit accumulation. This is the default.
    #[default]
    Wide,
    /// 32-bit accumulation, compatible with the original reader.
    Truncating32,
}

/// Decode an unsigned varint starting at `offset` using [`Accumulation::Wide`].
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success, where `bytes_consumed`
/// counts from `offset` and is between 1 and 5.
///
/// # Wire format examples
///
/// | Encoded bytes                  | Value        | Length |
/// |--------------------------------|--------------|--------|
/// | `[0x00]`                       | 0            | 1      |
/// | `[0x7F]`                       | 127          | 1      |
/// | `[0x80, 0x01]`                 | 128          | 2      |
/// | `[0xAC, 0x02]`                 | 300          | 2      |
/// | `[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]` | 4294967295 | 5      |
///
/// # Errors
///
/// - [`WireError::UnexpectedEndOfBuffer`] if the input ends before a byte
///   with a clear continuation bit, or `offset` is at or past the end.
/// - [`WireError::VarIntTooLong`] if the 5th byte still has its
///   continuation bit set.
pub fn decode_varuint(buf: &[u8], offset: usize) -> Result<(u64, usize), WireError> {
    decode_varuint_with(buf, offset, Accumulation::Wide)
}

/// Decode a zig-zag signed varint starting at `offset` using
/// [`Accumulation::Wide`].
///
/// Zig-zag maps unsigned values to signed ones in the order
/// `0, -1, 1, -2, 2, ...`, so small magnitudes of either sign stay short.
///
/// # Errors
///
/// Same as [`decode_varuint`].
pub fn decode_varint(buf: &[u8], offset: usize) -> Result<(i64, usize), WireError> {
    decode_varint_with(buf, offset, Accumulation::Wide)
}

/// Decode an unsigned varint with an explicit accumulation width.
///
/// Under [`Accumulation::Truncating32`] the returned value is the raw 32-bit
/// pattern, so it never exceeds `u32::MAX`.
///
/// # Errors
///
/// Same as [`decode_varuint`].
pub fn decode_varuint_with(
    buf: &[u8],
    offset: usize,
    accumulation: Accumulation,
) -> Result<(u64, usize), WireError> {
    let mut wide: u64 = 0;
    let mut narrow: u32 = 0;
    let mut shift: u32 = 0;

    for i in 0..MAX_VARINT_BYTES {
        let pos = offset.saturating_add(i);
        let &byte = buf
            .get(pos)
            .ok_or(WireError::UnexpectedEndOfBuffer { offset: pos })?;

        let data = byte & 0x7F;
        match accumulation {
            Accumulation::Wide => wide |= u64::from(data) << shift,
            // shift tops out at 28, so bits pushed past 31 are dropped
            Accumulation::Truncating32 => narrow |= u32::from(data) << shift,
        }
        shift += 7;

        if byte & 0x80 == 0 {
            let value = match accumulation {
                Accumulation::Wide => wide,
                Accumulation::Truncating32 => u64::from(narrow),
            };
            return Ok((value, i + 1));
        }
    }

    Err(WireError::VarIntTooLong { offset })
}

/// Decode a zig-zag signed varint with an explicit accumulation width.
///
/// # Errors
///
/// Same as [`decode_varuint`].
pub fn decode_varint_with(
    buf: &[u8],
    offset: usize,
    accumulation: Accumulation,
) -> Result<(i64, usize), WireError> {
    let (raw, consumed) = decode_varuint_with(buf, offset, accumulation)?;
    Ok((unzigzag(raw, accumulation), consumed))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn unzigzag(raw: u64, accumulation: Accumulation) -> i64 {
    match accumulation {
        Accumulation::Wide => {
            // raw holds at most 35 bits, so the shifted value fits in i64
            let magnitude = (raw >> 1) as i64;
            if raw & 1 == 0 { magnitude } else { !magnitude }
        }
        Accumulation::Truncating32 => {
            // Arithmetic shift on the signed 32-bit pattern, as the old reader did.
            let signed = raw as u32 as i32;
            let magnitude = signed >> 1;
            i64::from(if signed & 1 == 0 { magnitude } else { !magnitude })
        }
    }
}
