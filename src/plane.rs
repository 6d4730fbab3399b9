//! Orchestrates one plane's compression: predict, histogram, degenerate
//! fast path or Huffman build, then slice-based bitstream assembly.
//!
//! See: 4.6. PlaneEncoder

use log::{debug, trace};

use crate::bitio::{BitWriter, ByteStream};
use crate::constants::NUM_SYMBOLS;
use crate::error::Result;
use crate::histogram::{count_usage, degenerate_symbol, Histogram};
use crate::huffman::{self, HuffEntry};
use crate::pixfmt::Prediction;
use crate::predictor::predict;

/// Scratch state reused across planes and frames.
///
/// See: 3. DATA MODEL (Lifecycles), §5 (fast-realloc discipline)
pub struct PlaneScratch {
    residual: Vec<u8>,
    slice_bits: BitWriter,
    swap_buf: Vec<u8>,
}

impl PlaneScratch {
    pub fn new() -> Self {
        Self {
            residual: Vec::new(),
            slice_bits: BitWriter::new(0),
            swap_buf: Vec::new(),
        }
    }

    /// Grows scratch to cover a `width x height` plane plus bit-writer
    /// flush padding. Never shrinks.
    fn ensure_capacity(&mut self, width: usize, height: usize) {
        let samples = width * height;
        if self.residual.len() < samples {
            self.residual.resize(samples, 0);
        }
        // Worst case every sample needs up to 25 bits; padded to 32 bits.
        let bit_capacity = samples * 4 + 8;
        self.slice_bits.reserve(bit_capacity);
    }
}

impl Default for PlaneScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes one plane (`src`, sampled with `step`/`src_stride`) into
/// `out`, as `slices` horizontal strips.
///
/// See: * 4.6.1. Degenerate single-symbol fast path
///      * 4.6.2. Normal path: plane header
///      * 4.6.3. Slices
pub fn encode_plane(
    scratch: &mut PlaneScratch,
    out: &mut ByteStream,
    src: &[u8],
    src_stride: usize,
    step: usize,
    width: usize,
    height: usize,
    pred: Prediction,
    slices: usize,
) -> Result<()> {
    debug_assert!(slices >= 1);
    scratch.ensure_capacity(width, height);

    predict(
        pred,
        src,
        src_stride,
        step,
        width,
        height,
        &mut scratch.residual,
    );

    let mut counts: Histogram = [0; NUM_SYMBOLS];
    count_usage(&scratch.residual, width, height, &mut counts);
    let total = (width * height) as u32;

    if let Some(sym) = degenerate_symbol(&counts, total) {
        debug!("plane {}x{}: degenerate, symbol 0x{:02x}", width, height, sym);
        write_degenerate_header(out, sym, slices)?;
        return Ok(());
    }

    let entries = huffman::build(&counts);
    trace!(
        "plane {}x{}: max code length {} bits",
        width,
        height,
        entries.iter().map(|e| e.len).max().unwrap_or(0)
    );

    for e in &entries {
        out.put_u8(e.len)?;
    }

    let offset_table_pos = out.tell();
    for _ in 0..slices {
        out.put_le32(0)?;
    }
    let payload_start = out.tell();

    let mut cumulative: u32 = 0;
    for slice_index in 0..slices {
        let row_start = height * slice_index / slices;
        let row_end = height * (slice_index + 1) / slices;

        let slice_bytes = write_slice(
            scratch,
            width,
            row_start,
            row_end,
            &entries,
        )?;

        out.put_bytes(&scratch.swap_buf[..slice_bytes])?;
        cumulative += slice_bytes as u32;

        // Back-fill this slice's cumulative end-offset. See §4.6.3 and
        // §9 "Offset table back-fill": seeking here mirrors the
        // reference's interleaved writes while the observable layout
        // stays the simple [lengths][offsets][slices...] sequence.
        let after_payload = out.tell();
        let slot = offset_table_pos + 4 * slice_index;
        out.seek_relative(slot as isize - after_payload as isize)?;
        out.put_le32(cumulative)?;
        out.seek_relative(after_payload as isize - out.tell() as isize)?;
    }
    debug_assert_eq!(out.tell(), payload_start + cumulative as usize);

    Ok(())
}

/// Writes the 256-byte degenerate length table plus `slices` zero
/// offsets (§4.6.1).
fn write_degenerate_header(out: &mut ByteStream, sym: u8, slices: usize) -> Result<()> {
    for s in 0..NUM_SYMBOLS as u16 {
        out.put_u8(if s as u8 == sym { 0 } else { 0xFF })?;
    }
    for _ in 0..slices {
        out.put_le32(0)?;
    }
    Ok(())
}

/// Bit-packs residual rows `[row_start, row_end)` of the plane, pads to
/// 32 bits, then byte-swaps in 32-bit words into `scratch.swap_buf`.
///
/// Returns the number of bytes written (a multiple of 4).
fn write_slice(
    scratch: &mut PlaneScratch,
    width: usize,
    row_start: usize,
    row_end: usize,
    entries: &[HuffEntry; NUM_SYMBOLS],
) -> Result<usize> {
    scratch.slice_bits.reset();
    let begin = row_start * width;
    let end = row_end * width;
    for &byte in &scratch.residual[begin..end] {
        let e = &entries[byte as usize];
        scratch.slice_bits.put(e.code, e.len as u32)?;
    }
    scratch.slice_bits.pad_to_32()?;

    let bytes = scratch.slice_bits.bytes_written();
    if scratch.swap_buf.len() < bytes {
        scratch.swap_buf.resize(bytes, 0);
    }
    byte_swap_words(scratch.slice_bits.bytes(), &mut scratch.swap_buf[..bytes]);
    Ok(bytes)
}

/// Byte-swaps `src` in 32-bit words into `dst`: `[b0 b1 b2 b3] -> [b3 b2
/// b1 b0]`.
///
/// See: 4.6.3 step 2.
fn byte_swap_words(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len() % 4, 0);
    debug_assert_eq!(src.len(), dst.len());
    for w in 0..src.len() / 4 {
        let base = w * 4;
        dst[base] = src[base + 3];
        dst[base + 1] = src[base + 2];
        dst[base + 2] = src[base + 1];
        dst[base + 3] = src[base];
    }
}
