/// Decode failures. Offsets are absolute positions in the caller's buffer,
/// not relative to the start of the value being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The read position ran past the end of the input.
    #[error("unexpected end of buffer at offset {offset}")]
    UnexpectedEndOfBuffer { offset: usize },

    /// Five bytes were read and the last still had its continuation bit set.
    #[error("varint starting at offset {offset} exceeds the 5-byte limit")]
    VarIntTooLong { offset: usize },

    /// A decoded coordinate delta does not fit in 16 bits.
    #[error("coordinate delta {value} does not fit in 16 bits")]
    CoordinateOutOfRange { value: u64 },
}
