//! Emits the 16-byte container-level header written once per stream.
//!
//! See: 4.8. ExtradataWriter

use log::debug;

use crate::constants::{COMP_HUFF, IMPLEMENTATION_ID};
use crate::pixfmt::PixelFormat;

/// Stateless emitter for the stream-level extradata.
pub struct ExtradataWriter;

impl ExtradataWriter {
    /// Builds the 16-byte header for a stream encoded with `format`,
    /// `slices` slices per plane, and optional interlaced flagging.
    ///
    /// See: 4.8 table.
    pub fn write(format: PixelFormat, slices: usize, interlaced: bool) -> [u8; 16] {
        debug!(
            "extradata: format={:?} slices={} interlaced={}",
            format, slices, interlaced
        );
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&[0x01, 0x00, 0x00, IMPLEMENTATION_ID]);
        out[4..8].copy_from_slice(&format.utvideo_tag().to_le_bytes());
        out[8..12].copy_from_slice(&4u32.to_le_bytes());

        let slices_minus1 = (slices.saturating_sub(1)) as u32;
        let flags = (slices_minus1 << 24) | (if interlaced { 1 << 11 } else { 0 }) | COMP_HUFF;
        out[12..16].copy_from_slice(&flags.to_le_bytes());
        out
    }
}
