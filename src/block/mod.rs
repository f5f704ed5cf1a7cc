//! Single 64-byte block codec: the cost model, the exhaustive-search
//! encoder, and the decoder state machine. The stream engine (`crate::stream`)
//! drives these over a byte stream with bounded buffering.

pub mod cost;
pub mod decode;
pub mod encode;

pub use cost::block_cost;
pub use decode::{decode_block, DecodeOutcome};
pub use encode::{encode_block, EncodeOptions};

use arrayvec::ArrayVec;

use crate::error::{DonutError, Result};

/// Convenience wrapper around [`encode_block`] for callers that only have
/// a runtime-checked slice rather than a `&[u8; 64]`.
pub fn encode_block_slice(block: &[u8], opts: &EncodeOptions) -> Result<ArrayVec<u8, 65>> {
  let array: [u8; 64] =
    block.try_into().map_err(|_| DonutError::InvalidBlockLength(block.len()))?;
  Ok(encode_block(&array, opts))
}

#[cfg(test)]
mod slice_tests {
  use super::*;

  #[test]
  fn rejects_wrong_length_slices() {
    let short = [0u8; 32];
    assert!(matches!(encode_block_slice(&short, &EncodeOptions::default()), Err(DonutError::InvalidBlockLength(32))));
  }

  #[test]
  fn accepts_exact_length_slice() {
    let block = [0u8; 64];
    let encoded = encode_block_slice(&block, &EncodeOptions::default()).unwrap();
    assert_eq!(&encoded[..], &[0x00, 0x00]);
  }
}
