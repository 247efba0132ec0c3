//! collect.rs
//! Drain an input stream to end-of-stream into one immutable buffer.
//!
//! Chunk boundaries of the source are invisible in the result: the buffer is
//! the in-order concatenation of every chunk received. A read error before
//! end-of-stream drops whatever was received so far.

use std::io::{self, Read};

use bytes::Bytes;
use futures::io::{AsyncRead, AsyncReadExt};
use thiserror::Error;
use tracing::debug;

/// The input stream failed before end-of-stream.
#[derive(Debug, Error)]
#[error("input stream failed after {received} bytes: {source}")]
pub struct StreamReadError {
    /// Bytes received before the failure (discarded).
    pub received: usize,
    #[source]
    pub source: io::Error,
}

impl StreamReadError {
    pub fn new(received: usize, source: io::Error) -> Self {
        Self { received, source }
    }
}

/// Blocking collector.
pub fn collect_stream<R: Read>(mut reader: R) -> Result<Bytes, StreamReadError> {
    let mut buf = Vec::new();
    // read_to_end retries Interrupted and leaves the partial data in `buf`
    let result = reader.read_to_end(&mut buf);
    finish(result, buf)
}

/// Cooperative collector; yields to the executor while the source is pending.
pub async fn collect_stream_async<R: AsyncRead + Unpin>(mut reader: R) -> Result<Bytes, StreamReadError> {
    let mut buf = Vec::new();
    let result = reader.read_to_end(&mut buf).await;
    finish(result, buf)
}

fn finish(result: io::Result<usize>, buf: Vec<u8>) -> Result<Bytes, StreamReadError> {
    match result {
        Ok(n) => {
            debug!(bytes = n, "input collected");
            Ok(Bytes::from(buf))
        }
        Err(e) => Err(StreamReadError::new(buf.len(), e)),
    }
}
