//! compression/types.rs
//! Decoder error and outcome types.

use thiserror::Error;

/// Raw DEFLATE decode failure. Always fatal: the bitstream has no length
/// prefix, so a short input can't be told apart from a corrupt one.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input ran out before the final block was complete.
    #[error("truncated deflate stream: input exhausted after {consumed} bytes ({produced} bytes decoded, final block not reached)")]
    Truncated { consumed: u64, produced: u64 },

    /// The bitstream violates RFC 1951.
    #[error("corrupt deflate stream at input offset {offset}: {msg}")]
    Corrupt { offset: u64, msg: String },
}

impl DecodeError {
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::Truncated { .. })
    }
}

/// Counts reported by a successful decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InflateOutcome {
    /// Bytes belonging to the DEFLATE stream, up to and including the final block.
    pub consumed: usize,
    /// Decompressed bytes appended to the output.
    pub produced: usize,
    /// Bytes left over after the final block.
    pub trailing: usize,
}
