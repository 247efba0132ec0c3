//! compression/deflate.rs
//! Raw DEFLATE (RFC 1951, no zlib/gzip wrapper) via miniz_oxide.
//!
//! The whole stream is expected in one buffer. Decoding stops at the block
//! carrying the final-block flag; anything after it is reported as trailing.
//! The output buffer is non-wrapping, so a back-reference reaching before the
//! first decoded byte is rejected instead of reading an empty window.

use miniz_oxide::inflate::core::{decompress, inflate_flags, DecompressorOxide};
use miniz_oxide::inflate::TINFLStatus;
use tracing::{debug, warn};

use crate::compression::constants::{initial_output_hint, OUTPUT_GROW_SIZE};
use crate::compression::types::{DecodeError, InflateOutcome};

// No TINFL_FLAG_HAS_MORE_INPUT: the buffer is the entire stream.
const RAW_FLAGS: u32 = inflate_flags::TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF;

pub struct RawInflater {
    inner: Box<DecompressorOxide>,
}

impl RawInflater {
    pub fn new() -> Self {
        Self { inner: Box::default() }
    }

    /// Decode a complete raw DEFLATE stream from `input`, appending to `out`.
    ///
    /// `out` is left untouched on error.
    pub fn inflate(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<InflateOutcome, DecodeError> {
        *self.inner = DecompressorOxide::default();

        // Back-references resolve against `buf` only, never against bytes
        // already in `out`.
        let mut buf = vec![0u8; initial_output_hint(input.len())];
        let mut in_pos = 0;
        let mut out_pos = 0;

        loop {
            let (status, read, written) = decompress(&mut self.inner, &input[in_pos..], &mut buf, out_pos, RAW_FLAGS);
            in_pos += read;
            out_pos += written;

            match status {
                TINFLStatus::Done => break,
                TINFLStatus::HasMoreOutput => {
                    let grow = buf.len().max(OUTPUT_GROW_SIZE);
                    buf.resize(buf.len() + grow, 0);
                }
                TINFLStatus::FailedCannotMakeProgress | TINFLStatus::NeedsMoreInput => {
                    return Err(DecodeError::Truncated {
                        consumed: in_pos as u64,
                        produced: out_pos as u64,
                    });
                }
                other => {
                    return Err(DecodeError::Corrupt {
                        offset: in_pos as u64,
                        msg: describe(other),
                    });
                }
            }
        }
        buf.truncate(out_pos);

        let outcome = InflateOutcome {
            consumed: in_pos,
            produced: out_pos,
            trailing: input.len() - in_pos,
        };

        if outcome.trailing > 0 {
            warn!(trailing = outcome.trailing, consumed = in_pos, "ignoring bytes after final deflate block");
        }
        debug!(consumed = in_pos, produced = out_pos, "raw inflate complete");

        if out.is_empty() {
            *out = buf;
        } else {
            out.extend_from_slice(&buf);
        }
        Ok(outcome)
    }
}

impl Default for RawInflater {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(status: TINFLStatus) -> String {
    match status {
        TINFLStatus::Failed => {
            "invalid block type, stored length, Huffman code, or back-reference distance".into()
        }
        other => format!("decoder status {:?}", other),
    }
}

/// Decode a complete raw DEFLATE buffer into a fresh output buffer.
pub fn inflate_raw(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    RawInflater::new().inflate(input, &mut out)?;
    Ok(out)
}
