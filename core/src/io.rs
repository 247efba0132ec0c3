//! io.rs
//! Single-shot output writes.

use std::io::Write;

use futures::io::{AsyncWrite, AsyncWriteExt};

use crate::types::InflateError;

/// One write of the whole buffer, then flush.
pub fn write_output<W: Write>(w: &mut W, bytes: &[u8]) -> Result<(), InflateError> {
    w.write_all(bytes).map_err(InflateError::Write)?;
    w.flush().map_err(InflateError::Write)?;
    Ok(())
}

pub async fn write_output_async<W: AsyncWrite + Unpin>(w: &mut W, bytes: &[u8]) -> Result<(), InflateError> {
    w.write_all(bytes).await.map_err(InflateError::Write)?;
    w.flush().await.map_err(InflateError::Write)?;
    Ok(())
}
