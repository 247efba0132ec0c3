//! rawinflate
//!
//! Reads a raw DEFLATE stream from stdin (or INPUT), writes the decompressed
//! bytes to stdout. Nothing reaches stdout unless the whole stream decoded.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use inflate_core::{inflate_stream_async, InflateError, StreamReadError};
use tokio_util::compat::{TokioAsyncReadCompatExt, TokioAsyncWriteCompatExt};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

#[derive(Parser, Debug)]
#[command(version, about = "Decompress a raw DEFLATE (RFC 1951) stream to stdout")]
struct Args {
    /// Input file; omit or use `-` for stdin
    input: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<InflateError>() {
            Some(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
            Some(e) => {
                eprintln!("rawinflate: {}: {:#}", e.kind(), err);
                ExitCode::from(exit_code(e))
            }
            None => {
                eprintln!("rawinflate: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the decoded bytes only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout().compat_write();

    let snapshot = match args.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = tokio::fs::File::open(&path)
                .await
                .map_err(|e| InflateError::from(StreamReadError::new(0, e)))
                .with_context(|| format!("opening {}", path.display()))?;
            inflate_stream_async(file.compat(), &mut stdout).await?
        }
        _ => inflate_stream_async(tokio::io::stdin().compat(), &mut stdout).await?,
    };

    debug!(telemetry = %serde_json::to_string(&snapshot)?, "run complete");
    Ok(())
}

fn exit_code(err: &InflateError) -> u8 {
    match err {
        InflateError::Decode(_) => EX_DATAERR,
        InflateError::StreamRead(_) | InflateError::Write(_) => EX_IOERR,
    }
}
