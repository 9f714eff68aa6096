//! Parsing of user-supplied hex and integer arguments.

use anyhow::{Context, Result, bail};

/// Parse a hex byte string. Whitespace anywhere and a leading `0x` are
/// ignored, so `"0xAC 02"` and `"ac02"` are the same input.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = strip_hex_prefix(&compact).unwrap_or(&compact);
    hex::decode(digits).with_context(|| format!("invalid hex input {input:?}"))
}

/// Parse a 16-bit pattern given as `0x`-prefixed hex or plain decimal.
pub fn parse_bits(input: &str) -> Result<u16> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("empty bit pattern");
    }
    let parsed = match strip_hex_prefix(trimmed) {
        Some(digits) => u16::from_str_radix(digits, 16),
        None => trimmed.parse::<u16>(),
    };
    parsed.with_context(|| format!("{input:?} is not a 16-bit value"))
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}
