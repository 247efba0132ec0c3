//! telemetry/counters.rs
//! Byte counters filled in while the pipeline runs.
//!
//! Converted into an immutable TelemetrySnapshot at pipeline end.

use crate::compression::InflateOutcome;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TelemetryCounters {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub bytes_trailing: u64,
}

impl TelemetryCounters {
    /// Record the collected input length.
    pub fn add_input(&mut self, len: usize) {
        self.bytes_in += len as u64;
    }

    /// Record one decode.
    pub fn add_decode(&mut self, outcome: &InflateOutcome) {
        self.bytes_out += outcome.produced as u64;
        self.bytes_trailing += outcome.trailing as u64;
    }
}
