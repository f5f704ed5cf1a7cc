// Bit-level primitives shared by the PB8 codec and the block encoder/decoder.
//
// A "plane" is one 8x8 1-bit bitmap packed into a u64, little-endian,
// row-major: row 0 occupies the low byte, row 7 the high byte.

use byteorder::{ByteOrder, LittleEndian};

/// Unpack 8 little-endian bytes into a plane value.
pub fn read_plane_le(bytes: &[u8]) -> u64 {
  LittleEndian::read_u64(bytes)
}

/// Pack a plane value into 8 little-endian bytes.
pub fn write_plane_le(plane: u64, bytes: &mut [u8]) {
  LittleEndian::write_u64(bytes, plane);
}

/// 135-degree diagonal transpose of an 8x8 bit matrix: the bit at
/// (row r, column c) moves to (row c, column r).
///
/// Short-circuits on the all-zero and all-one planes, which are fixed
/// points of the transpose and common enough in CHR data to be worth
/// skipping the column gather for.
pub fn flip_plane(plane: u64) -> u64 {
  if plane == 0x0000_0000_0000_0000 || plane == 0xffff_ffff_ffff_ffff {
    return plane;
  }

  let mut result = 0u64;
  for i in 0..8 {
    // Gather column `i` (one bit from each row byte) into a single byte
    // via mask-and-multiply, then place it as row `i` of the result.
    let mut t = plane >> i;
    t &= 0x0101_0101_0101_0101;
    t = t.wrapping_mul(0x0102_0408_1020_4080);
    t >>= 56;
    t &= 0xff;
    result |= t << (i * 8);
  }
  result
}

/// 3-step parallel bit count of a single byte.
pub fn popcount8(x: u8) -> u8 {
  let mut x = x;
  x = (x & 0x55) + ((x >> 1) & 0x55);
  x = (x & 0x33) + ((x >> 2) & 0x33);
  x = (x & 0x0f) + ((x >> 4) & 0x0f);
  x
}
