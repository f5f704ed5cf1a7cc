// Simulated 6502 decode cost for a candidate compressed block.
//
// This model exists purely to let the encoder compare candidate encodings
// against each other and against a caller-supplied cycle budget; it is
// never observed outside the encoder.

use crate::bits::popcount8;

const PLANE_DEF_TABLE: [u8; 4] = [0x00, 0x55, 0xAA, 0xFF];

/// Compute the simulated decode cost, in 6502 cycles, of `block` (a
/// header byte followed by its payload, exactly as it would appear in
/// the compressed stream).
///
/// Returns 0 for an empty or truncated block, matching the reference
/// decoder's treatment of insufficient data as "no work to do" rather
/// than an error.
pub fn block_cost(block: &[u8]) -> i64 {
  if block.is_empty() {
    return 0;
  }
  let header = block[0];
  if header >= 0xC0 {
    return 0;
  }
  if header == 0x2A {
    return 1268;
  }

  let mut cycles: i64 = 1298;
  if header & 0xC0 != 0 {
    cycles += 640;
  }
  if header & 0x20 != 0 {
    cycles += 4;
  }
  if header & 0x10 != 0 {
    cycles += 4;
  }

  let (plane_def, header_len, single_pb8_mode) = if header & 0x02 != 0 {
    if block.len() < 2 {
      return 0;
    }
    let plane_def = block[1];
    cycles += 5;
    (plane_def, 2usize, (header & 0x04 != 0) && plane_def != 0x00)
  } else {
    let plane_def = PLANE_DEF_TABLE[((header >> 2) & 0x03) as usize];
    (plane_def, 1usize, false)
  };

  let pb8_count = i64::from(popcount8(plane_def));
  cycles += pb8_count * if header & 0x01 != 0 { 614 } else { 75 };

  let mut payload_len = block.len() as i64 - header_len as i64;
  if single_pb8_mode {
    payload_len *= pb8_count;
    cycles += pb8_count;
  }
  payload_len -= pb8_count;
  cycles += payload_len * 6;

  cycles
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reserved_header_is_free() {
    assert_eq!(block_cost(&[0xC0]), 0);
    assert_eq!(block_cost(&[0xFF]), 0);
  }

  #[test]
  fn uncompressed_block_fixed_cost() {
    let mut block = vec![0x2A];
    block.extend([0u8; 64]);
    assert_eq!(block_cost(&block), 1268);
  }

  #[test]
  fn solid_zero_block_cost() {
    // header 0x00: modal, implicit plane_def table[0]=0x00, no pb8 planes.
    assert_eq!(block_cost(&[0x00]), 1298);
  }

  #[test]
  fn empty_buffer_is_free() {
    assert_eq!(block_cost(&[]), 0);
  }
}
