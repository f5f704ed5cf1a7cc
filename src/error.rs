use thiserror::Error;

/// Errors surfaced by the `donut_nes` crate.
///
/// The block/stream decoder never returns one of these for malformed or
/// truncated *compressed data* -- per the codec's error taxonomy, bad
/// input degrades to "no progress" or a short decode, never a crash or
/// an `Err`. This type only covers API misuse and genuine I/O failures.
#[derive(Error, Debug)]
pub enum DonutError {
  #[error("uncompressed block must be exactly 64 bytes, got {0}")]
  InvalidBlockLength(usize),
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DonutError>;
