// Gap-buffered stream engine: runs the block codec across an arbitrarily
// long `Read`/`Write` pair in bounded memory.
//
// Grounded in donut.c's two-buffer-plus-gap scheme (`byte_buffer`,
// `BUF_GAP_SIZE`): an input staging buffer holds whatever hasn't yet been
// consumed by the block codec, topped up from the reader in `IO_BLOCK_SIZE`
// chunks, while an output staging buffer accumulates encoded/decoded bytes
// and is drained to the writer once it reaches the same threshold. Here the
// "gap" is simply the unconsumed prefix left behind after each `Vec::drain`,
// rather than a literal ring index, but the bound on live memory is the same:
// at most one I/O chunk plus one block's worth of carry.

use std::io::{self, Read, Write};

use crate::block::{decode_block, encode_block, DecodeOutcome, EncodeOptions};

const IO_BLOCK_SIZE: usize = 32 * 1024;
const UNCOMPRESSED_BLOCK_LEN: usize = 64;
/// Worst-case compressed block length the decoder may need buffered before
/// it can guarantee forward progress without guessing at missing bytes.
const COMPRESSED_BLOCK_MARGIN: usize = 74;

/// Compress all of `r` into `w`, returning `(bytes_in, bytes_out)`.
///
/// A final residual of fewer than 64 bytes at EOF is discarded, never
/// encoded — matching `donut_compress`'s `if (src_bytes_remain < 64)
/// break;` and `compress_blocks`'s `while (... >= 64)` loop condition.
pub fn compress<R: Read, W: Write>(mut r: R, mut w: W, opts: &EncodeOptions) -> io::Result<(u64, u64)> {
  let mut staging: Vec<u8> = Vec::with_capacity(IO_BLOCK_SIZE + UNCOMPRESSED_BLOCK_LEN);
  let mut out_buf: Vec<u8> = Vec::with_capacity(IO_BLOCK_SIZE + 65);
  let mut bytes_in: u64 = 0;
  let mut bytes_out: u64 = 0;
  let mut eof = false;

  loop {
    if !eof && staging.len() < IO_BLOCK_SIZE {
      eof = fill(&mut r, &mut staging, IO_BLOCK_SIZE + UNCOMPRESSED_BLOCK_LEN)?;
    }

    while staging.len() >= UNCOMPRESSED_BLOCK_LEN {
      let mut block = [0u8; UNCOMPRESSED_BLOCK_LEN];
      block.copy_from_slice(&staging[..UNCOMPRESSED_BLOCK_LEN]);
      staging.drain(..UNCOMPRESSED_BLOCK_LEN);
      let encoded = encode_block(&block, opts);
      out_buf.extend_from_slice(&encoded);
      bytes_in += UNCOMPRESSED_BLOCK_LEN as u64;
    }

    if eof && !staging.is_empty() {
      // Fewer than 64 bytes remain and no more are coming: discard them.
      staging.clear();
    }

    if out_buf.len() >= IO_BLOCK_SIZE || (eof && !out_buf.is_empty()) {
      w.write_all(&out_buf)?;
      bytes_out += out_buf.len() as u64;
      out_buf.clear();
    }

    if eof && staging.is_empty() {
      break;
    }
  }

  Ok((bytes_in, bytes_out))
}

/// Decompress all of `r` into `w`, returning `(bytes_in, bytes_out)`.
///
/// A truncated trailing block is completed with zero bytes rather than
/// rejected, matching the decoder's "never fail on malformed input"
/// contract (spec-level: insufficient input degrades, it never panics).
pub fn decompress<R: Read, W: Write>(mut r: R, mut w: W) -> io::Result<(u64, u64)> {
  let mut staging: Vec<u8> = Vec::with_capacity(IO_BLOCK_SIZE + COMPRESSED_BLOCK_MARGIN);
  let mut out_buf: Vec<u8> = Vec::with_capacity(IO_BLOCK_SIZE + UNCOMPRESSED_BLOCK_LEN);
  let mut bytes_in: u64 = 0;
  let mut bytes_out: u64 = 0;
  let mut eof = false;

  loop {
    if !eof && staging.len() < IO_BLOCK_SIZE {
      eof = fill(&mut r, &mut staging, IO_BLOCK_SIZE + COMPRESSED_BLOCK_MARGIN)?;
    }

    loop {
      let mut dst = [0u8; UNCOMPRESSED_BLOCK_LEN];
      match decode_block(&staging, &mut dst, eof) {
        DecodeOutcome::Block { consumed } => {
          out_buf.extend_from_slice(&dst);
          staging.drain(..consumed);
          bytes_in += consumed as u64;
          bytes_out += UNCOMPRESSED_BLOCK_LEN as u64;
        }
        DecodeOutcome::Skipped { consumed } => {
          staging.drain(..consumed);
          bytes_in += consumed as u64;
        }
        DecodeOutcome::NoProgress => break,
      }
    }

    if out_buf.len() >= IO_BLOCK_SIZE || (eof && !out_buf.is_empty()) {
      w.write_all(&out_buf)?;
      out_buf.clear();
    }

    if eof {
      break;
    }
  }

  Ok((bytes_in, bytes_out))
}

/// Top `buf` up to `target` bytes by reading from `r`. Returns `true` once
/// the reader has signalled EOF (a zero-length read).
fn fill<R: Read>(r: &mut R, buf: &mut Vec<u8>, target: usize) -> io::Result<bool> {
  let mut chunk = [0u8; 4096];
  while buf.len() < target {
    let n = r.read(&mut chunk)?;
    if n == 0 {
      return Ok(true);
    }
    buf.extend_from_slice(&chunk[..n]);
  }
  Ok(false)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trips_exact_multiple_of_block_size() {
    let mut input = Vec::new();
    for i in 0..(64 * 200) {
      input.push((i * 31 + 7) as u8);
    }
    let opts = EncodeOptions::default();
    let mut compressed = Vec::new();
    let (cin, _cout) = compress(&input[..], &mut compressed, &opts).unwrap();
    assert_eq!(cin, input.len() as u64);

    let mut decompressed = Vec::new();
    let (_din, dout) = decompress(&compressed[..], &mut decompressed).unwrap();
    assert_eq!(dout, input.len() as u64);
    assert_eq!(decompressed, input);
  }

  #[test]
  fn round_trips_non_multiple_of_block_size() {
    let mut input = vec![0u8; 64 * 3 + 17];
    for (i, b) in input.iter_mut().enumerate() {
      *b = (i * 11) as u8;
    }
    let prefix_len = (input.len() / 64) * 64;
    let opts = EncodeOptions::default();
    let mut compressed = Vec::new();
    let (cin, _) = compress(&input[..], &mut compressed, &opts).unwrap();
    assert_eq!(cin, prefix_len as u64);

    let mut decompressed = Vec::new();
    decompress(&compressed[..], &mut decompressed).unwrap();
    // The residual tail (< 64 bytes) is discarded on compression, never
    // padded: the decoded output is exactly the 64-byte-aligned prefix.
    assert_eq!(decompressed.len(), prefix_len);
    assert_eq!(&decompressed[..], &input[..prefix_len]);
  }

  #[test]
  fn empty_input_round_trips_to_empty_output() {
    let opts = EncodeOptions::default();
    let mut compressed = Vec::new();
    let (cin, cout) = compress(&[][..], &mut compressed, &opts).unwrap();
    assert_eq!(cin, 0);
    assert_eq!(cout, 0);
    assert!(compressed.is_empty());

    let mut decompressed = Vec::new();
    let (din, dout) = decompress(&compressed[..], &mut decompressed).unwrap();
    assert_eq!(din, 0);
    assert_eq!(dout, 0);
    assert!(decompressed.is_empty());
  }

  #[test]
  fn large_solid_stream_compresses_well_below_input_size() {
    let input = vec![0u8; 64 * 1000];
    let opts = EncodeOptions::default();
    let mut compressed = Vec::new();
    compress(&input[..], &mut compressed, &opts).unwrap();
    assert!(compressed.len() < input.len() / 10);
  }
}
