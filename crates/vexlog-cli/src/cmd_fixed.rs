/// Implementation of `vexlog fixed`.
///
/// Reads `--count` 4-byte little-endian fields starting at `--offset`.
///
/// # Output format
///
/// ```text
/// $ vexlog fixed 120000803f --offset 1
/// offset  value
///      1  1
/// ```
use std::fmt;

use anyhow::{Context, Result};
use tracing::debug;
use vexlog_wire::{WireError, read_f32_le, read_i32_le, read_u32_le};

use crate::{FieldKind, FixedArgs, input};

/// A decoded fixed-width field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FixedValue {
    U32(u32),
    I32(i32),
    F32(f32),
}

impl fmt::Display for FixedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedValue::U32(v) => write!(f, "{v}"),
            FixedValue::I32(v) => write!(f, "{v}"),
            FixedValue::F32(v) => write!(f, "{v}"),
        }
    }
}

/// Read one field of `kind` at `offset`.
///
/// # Errors
///
/// [`WireError::UnexpectedEndOfBuffer`] if fewer than four bytes remain.
pub fn read_field(
    bytes: &[u8],
    offset: usize,
    kind: FieldKind,
) -> Result<(FixedValue, usize), WireError> {
    match kind {
        FieldKind::U32 => read_u32_le(bytes, offset).map(|(v, n)| (FixedValue::U32(v), n)),
        FieldKind::I32 => read_i32_le(bytes, offset).map(|(v, n)| (FixedValue::I32(v), n)),
        FieldKind::F32 => read_f32_le(bytes, offset).map(|(v, n)| (FixedValue::F32(v), n)),
    }
}

/// Read `count` consecutive fields, returning each with its offset.
///
/// # Errors
///
/// Propagates the first [`WireError`]; nothing is returned for a partial run.
pub fn read_fields(
    bytes: &[u8],
    offset: usize,
    count: usize,
    kind: FieldKind,
) -> Result<Vec<(usize, FixedValue)>, WireError> {
    let mut out = Vec::with_capacity(count.min(bytes.len() / 4));
    let mut pos = offset;
    for _ in 0..count {
        let (value, len) = read_field(bytes, pos, kind)?;
        out.push((pos, value));
        pos = pos.saturating_add(len);
    }
    Ok(out)
}

/// Run `vexlog fixed`.
///
/// # Errors
///
/// Returns an error if the hex input is malformed or runs out before
/// `--count` fields have been read.
pub fn run(args: &FixedArgs) -> Result<()> {
    let bytes = input::parse_hex(&args.input)?;
    debug!(
        len = bytes.len(),
        offset = args.offset,
        count = args.count,
        kind = ?args.kind,
        "reading fixed fields"
    );

    let fields = read_fields(&bytes, args.offset, args.count, args.kind).with_context(|| {
        format!("cannot read {} field(s) at offset {}", args.count, args.offset)
    })?;

    println!("offset  value");
    for (offset, value) in fields {
        println!("{offset:>6}  {value}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_record() {
        let record = [0x12, 0x00, 0x00, 0x80, 0x3F];
        assert_eq!(
            read_field(&record, 1, FieldKind::F32),
            Ok((FixedValue::F32(1.0), 4))
        );
    }

    #[test]
    fn same_bytes_three_ways() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(
            read_field(&bytes, 0, FieldKind::U32).unwrap().0,
            FixedValue::U32(u32::MAX)
        );
        assert_eq!(
            read_field(&bytes, 0, FieldKind::I32).unwrap().0,
            FixedValue::I32(-1)
        );
        let (FixedValue::F32(v), _) = read_field(&bytes, 0, FieldKind::F32).unwrap() else {
            panic!("expected an f32");
        };
        assert!(v.is_nan());
    }

    #[test]
    fn pose_record_fields() {
        let mut record = vec![0x13];
        for v in [0.5f32, -1.25, 3.0] {
            record.extend(v.to_le_bytes());
        }
        assert_eq!(
            read_fields(&record, 1, 3, FieldKind::F32).unwrap(),
            vec![
                (1, FixedValue::F32(0.5)),
                (5, FixedValue::F32(-1.25)),
                (9, FixedValue::F32(3.0)),
            ]
        );
    }

    #[test]
    fn short_run_fails() {
        assert_eq!(
            read_fields(&[0x01, 0x00, 0x00, 0x00, 0x02], 0, 2, FieldKind::I32),
            Err(WireError::UnexpectedEndOfBuffer { offset: 5 })
        );
    }

    #[test]
    fn zero_count_reads_nothing() {
        assert!(read_fields(&[], 0, 0, FieldKind::U32).unwrap().is_empty());
    }
}
