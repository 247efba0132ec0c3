//! inflate-core
//!
//! Raw DEFLATE (RFC 1951) stream inflation: drain a reader, decode the whole
//! buffer, write the result once. No runtime, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod types;

pub mod collect;
pub mod compression;
pub mod io;
pub mod telemetry;

pub mod pipeline;

pub use collect::{collect_stream, collect_stream_async, StreamReadError};
pub use compression::{inflate_raw, DecodeError, InflateOutcome, RawInflater};
pub use pipeline::{inflate_stream, inflate_stream_async};
pub use types::InflateError;
