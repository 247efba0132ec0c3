use std::io;

use thiserror::Error;

use crate::{collect::StreamReadError, compression::DecodeError};

/// Unified pipeline error covering input, decode, and output failures.
/// - `From<T>` impls enable `?` across the pipeline.
/// - `kind()` is a stable short label for stderr and logs.
#[derive(Debug, Error)]
pub enum InflateError {
    /// Input stream failed before end-of-stream.
    #[error(transparent)]
    StreamRead(#[from] StreamReadError),

    /// Collected bytes are not a valid raw DEFLATE stream.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Writing the decoded bytes failed.
    #[error("output write failed: {0}")]
    Write(#[source] io::Error),
}

impl InflateError {
    pub fn kind(&self) -> &'static str {
        match self {
            InflateError::StreamRead(_) => "stream read",
            InflateError::Decode(_) => "decode",
            InflateError::Write(_) => "write",
        }
    }

    /// Output side closed by the consumer (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, InflateError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
