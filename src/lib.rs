//! Lossless codec for NES CHR tile data: PB8-plane compression of 64-byte
//! blocks, plus a bounded-memory stream engine to run it over arbitrarily
//! long input.

pub mod bits;
pub mod block;
pub mod error;
pub mod pb8;
pub mod stream;

pub use block::{block_cost, decode_block, encode_block, encode_block_slice, DecodeOutcome, EncodeOptions};
pub use error::{DonutError, Result};
pub use stream::{compress, decompress};
