// PB8 ("prefix-byte 8"): a one-byte prefix of 8 flags followed by literal
// bytes for the rows that differ from their predecessor.
//
// Row `i` (MSB-first across the flags byte, i.e. row 0 is flag bit 0x80):
//   flag bit 1 => the next source byte is a literal; it becomes the
//                 emitted row and the new "previous" byte.
//   flag bit 0 => the previous byte is re-emitted unchanged.
// The "previous" byte before any literal has appeared is `top_value`.

use arrayvec::ArrayVec;

/// Maximum encoded length of one PB8 plane: 1 flags byte + 8 literals.
pub const MAX_PB8_LEN: usize = 9;

/// Pack one plane into PB8 form, seeded with `top_value` as the row
/// above row 0. Returns 1 + (0..=8) bytes.
pub fn pack_pb8(plane: u64, top_value: u8) -> ArrayVec<u8, MAX_PB8_LEN> {
  let mut out = ArrayVec::new();
  out.push(0u8); // flags placeholder, patched below

  let mut flags = 0u8;
  let mut prev = top_value;
  for i in 0..8 {
    let row = (plane >> (8 * (7 - i))) as u8;
    if row != prev {
      out.push(row);
      prev = row;
      flags |= 0x80 >> i;
    }
  }
  out[0] = flags;
  out
}

/// Unpack one PB8 plane from `src`, seeded with `top_value`. Returns the
/// decoded plane and the number of bytes consumed (1 + popcount(flags)).
///
/// Panics if `src` is shorter than the encoded length; callers in the
/// stream engine only call this once they've verified enough bytes are
/// available (see `block::decode`'s `allow_partial` handling for the
/// short-buffer path, which pads with zero flags instead of calling this).
pub fn unpack_pb8(src: &[u8], top_value: u8) -> (u64, usize) {
  let mut flags = src[0];
  let mut pos = 1;
  let mut prev = top_value;
  let mut plane = 0u64;
  for _ in 0..8 {
    if flags & 0x80 != 0 {
      prev = src[pos];
      pos += 1;
    }
    flags <<= 1;
    plane = (plane << 8) | u64::from(prev);
  }
  (plane, pos)
}
