#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vexlog_wire::{WireError, decode_varint, decode_varuint};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    offset: usize,
}

// Fuzz target: arbitrary start offsets, including far past the end.
//
// Signed and unsigned decodes must consume the same bytes and report
// the same errors, and nothing may read out of bounds.
fuzz_target!(|input: Input| {
    let unsigned = decode_varuint(&input.bytes, input.offset);
    let signed = decode_varint(&input.bytes, input.offset);

    match (unsigned, signed) {
        (Ok((_, ul)), Ok((_, sl))) => {
            assert_eq!(ul, sl);
            assert!(input.offset + ul <= input.bytes.len());
        }
        (Err(ue), Err(se)) => {
            assert_eq!(ue, se);
            if input.offset >= input.bytes.len() {
                assert_eq!(ue, WireError::UnexpectedEndOfBuffer { offset: input.offset });
            }
        }
        (u, s) => panic!("signed/unsigned disagree: {u:?} vs {s:?}"),
    }
});
