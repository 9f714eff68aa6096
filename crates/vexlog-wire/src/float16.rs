use crate::error::WireError;
use crate::fixed::read_array;

const SIGN_MASK: u16 = 0x8000;
const EXPONENT_MASK: u16 = 0x7C00;
const FRACTION_MASK: u16 = 0x03FF;

/// All-ones exponent: infinity or NaN.
const EXPONENT_SPECIAL: u16 = 0x1F;

/// Decode an IEEE 754 binary16 bit pattern into an `f64`.
///
/// Every `f16` value is exactly representable as an `f64`, so no precision
/// is lost. This function is total: NaN and the infinities are ordinary
/// results, not errors.
///
/// ```text
/// ┌──────┬────────┬──────────┬──────────┐
/// │ bits │ 15     │ 14-10    │ 9-0      │
/// │ use  │ sign   │ exponent │ fraction │
/// └──────┴────────┴──────────┴──────────┘
/// ```
///
/// | Exponent | Fraction | Value                                |
/// |----------|----------|--------------------------------------|
/// | 0        | 0        | ±0                                   |
/// | 0        | != 0     | ±2^-14 × (fraction / 1024)           |
/// | 1..=30   | any      | ±2^(exponent-15) × (1 + fraction/1024) |
/// | 31       | 0        | ±∞                                   |
/// | 31       | != 0     | NaN                                  |
#[must_use]
pub fn decode_float16(bits: u16) -> f64 {
    let exponent = (bits & EXPONENT_MASK) >> 10;
    let fraction_bits = bits & FRACTION_MASK;
    let fraction = f64::from(fraction_bits) / 1024.0;

    let magnitude = match (exponent, fraction_bits) {
        (0, _) => 2f64.powi(-14) * fraction,
        (EXPONENT_SPECIAL, 0) => f64::INFINITY,
        (EXPONENT_SPECIAL, _) => return f64::NAN,
        _ => 2f64.powi(i32::from(exponent) - 15) * (1.0 + fraction),
    };

    if bits & SIGN_MASK == 0 { magnitude } else { -magnitude }
}

/// Read a little-endian binary16 value from `buf` at `offset` and decode it.
///
/// The robot logger stores each half float as its two in-memory bytes, low
/// byte first.
///
/// # Returns
///
/// `(decoded_value, 2)` on success.
///
/// # Errors
///
/// [`WireError::UnexpectedEndOfBuffer`] if fewer than two bytes remain at
/// `offset`. The reported offset is the first missing byte.
pub fn read_float16_le(buf: &[u8], offset: usize) -> Result<(f64, usize), WireError> {
    let bits = u16::from_le_bytes(read_array(buf, offset)?);
    Ok((decode_float16(bits), 2))
}
