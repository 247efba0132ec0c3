//! compression/mod.rs
//! Raw DEFLATE decoding of a fully collected buffer.

pub mod constants;
pub mod types;
pub mod deflate;

pub use constants::*;
pub use types::*;
pub use deflate::*;
