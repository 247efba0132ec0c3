//! compression/constants.rs
//! Output sizing for the raw inflater.

/// Output buffer growth step (32 KiB, one DEFLATE window).
pub const OUTPUT_GROW_SIZE: usize = 32 * 1024;

/// Initial output capacity guess, as a multiple of the input length.
pub const INITIAL_EXPANSION_FACTOR: usize = 4;

/// Upper bound for the initial capacity guess (64 MiB).
pub const MAX_INITIAL_OUTPUT_HINT: usize = 64 * 1024 * 1024;

/// Initial output capacity for a compressed input of `input_len` bytes.
pub fn initial_output_hint(input_len: usize) -> usize {
    input_len
        .saturating_mul(INITIAL_EXPANSION_FACTOR)
        .clamp(OUTPUT_GROW_SIZE, MAX_INITIAL_OUTPUT_HINT)
}
