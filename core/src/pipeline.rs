//! pipeline.rs
//! Collector -> raw inflate -> single write.
//!
//! Input and output handles are parameters, never the process handles, so the
//! whole flow runs against in-memory readers and writers in tests. The writer
//! is only touched after the decode succeeded.

use std::io::{Read, Write};
use std::time::Instant;

use bytes::Bytes;
use futures::io::{AsyncRead, AsyncWrite};
use tracing::{debug, instrument};

use crate::collect::{collect_stream, collect_stream_async};
use crate::compression::RawInflater;
use crate::io::{write_output, write_output_async};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::InflateError;

/// Blocking entry point for library callers. The `rawinflate` binary runs
/// [`inflate_stream_async`]; this path is exercised by the tests and the bench.
#[instrument(level = "debug", skip_all)]
pub fn inflate_stream<R: Read, W: Write>(reader: R, writer: &mut W) -> Result<TelemetrySnapshot, InflateError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let input = timer.time(Stage::Read, || collect_stream(reader))?;
    counters.add_input(input.len());

    let output = decode_stage(input, &mut timer, &mut counters)?;

    timer.time(Stage::Write, || write_output(writer, &output))?;
    debug!(bytes = output.len(), "output written");

    timer.finish();
    Ok(TelemetrySnapshot::from(&counters, &timer))
}

#[instrument(level = "debug", skip_all)]
pub async fn inflate_stream_async<R, W>(reader: R, writer: &mut W) -> Result<TelemetrySnapshot, InflateError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let t = Instant::now();
    let input = collect_stream_async(reader).await?;
    timer.add_stage_time(Stage::Read, t.elapsed());
    counters.add_input(input.len());

    let output = decode_stage(input, &mut timer, &mut counters)?;

    let t = Instant::now();
    write_output_async(writer, &output).await?;
    timer.add_stage_time(Stage::Write, t.elapsed());
    debug!(bytes = output.len(), "output written");

    timer.finish();
    Ok(TelemetrySnapshot::from(&counters, &timer))
}

// Consumes the input buffer; it is dropped once decoded.
fn decode_stage(
    input: Bytes,
    timer: &mut TelemetryTimer,
    counters: &mut TelemetryCounters,
) -> Result<Vec<u8>, InflateError> {
    let mut output = Vec::new();
    let outcome = timer.time(Stage::Decompress, || RawInflater::new().inflate(&input, &mut output))?;
    counters.add_decode(&outcome);
    Ok(output)
}
