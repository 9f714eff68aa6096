//! Rendered decode tables compared against inline insta snapshots.
//!
//! A diff here means a decoded value changed. Accept deliberate changes with
//! `cargo insta review`.

use insta::assert_snapshot;
use vexlog_tests::compress_coordinates;
use vexlog_wire::{decode_coordinates, decode_float16, decode_varint, decode_varuint};

fn render_float16(patterns: &[u16]) -> String {
    patterns
        .iter()
        .map(|&bits| format!("{bits:#06X}  {}", decode_float16(bits)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn float16_table() {
    let table = render_float16(&[
        0x0000, 0x8000, 0x3C00, 0xC000, 0x3555, 0x7BFF, 0x0400, 0x0001, 0x7C00, 0xFC00, 0x7E00,
    ]);
    assert_snapshot!(table, @r"
    0x0000  0
    0x8000  -0
    0x3C00  1
    0xC000  -2
    0x3555  0.333251953125
    0x7BFF  65504
    0x0400  0.00006103515625
    0x0001  0.00000005960464477539063
    0x7C00  inf
    0xFC00  -inf
    0x7E00  NaN
    ");
}

#[test]
fn varint_scan_table() {
    let buf = [
        0x00, 0x7F, 0x80, 0x01, 0xAC, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F,
    ];
    let mut rows = Vec::new();
    let mut offset = 0;
    while offset < buf.len() {
        let (unsigned, len) = decode_varuint(&buf, offset).unwrap();
        let (signed, _) = decode_varint(&buf, offset).unwrap();
        rows.push(format!("@{offset:02}  len={len}  {unsigned:>10}  {signed:>11}"));
        offset += len;
    }
    assert_snapshot!(rows.join("\n"), @r"
    @00  len=1           0            0
    @01  len=1         127          -64
    @02  len=2         128           64
    @04  len=2         300          150
    @06  len=5  4294967295  -2147483648
    ");
}

#[test]
fn coordinate_series() {
    let deltas = compress_coordinates(&[0.0, 0.25, -0.5, 1.0]);
    let rows: Vec<String> = deltas
        .iter()
        .zip(decode_coordinates(&deltas))
        .map(|(delta, metres)| format!("delta={delta:<5}  {metres:>7.3}"))
        .collect();
    assert_snapshot!(rows.join("\n"), @r"
    delta=35100    0.000
    delta=4604     0.250
    delta=51723   -0.500
    delta=27625    1.000
    ");
}
