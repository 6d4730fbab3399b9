//! Dispatches one picture across its planes, applying the RGB mangle
//! first where applicable, and appends the `frame_info` trailer.
//!
//! See: 4.7. FrameEncoder

use log::{debug, trace};

use crate::bitio::ByteStream;
use crate::pixfmt::{PixelFormat, Prediction};
use crate::plane::{encode_plane, PlaneScratch};
use crate::predictor::mangle_rgb_in_place;
use crate::error::Result;

/// One input picture: either a single interleaved buffer (RGB/RGBA) or
/// up to three planar buffers (YUV).
///
/// See: 3. DATA MODEL (Picture input), 6. EXTERNAL INTERFACES
pub enum Picture<'a> {
    Interleaved { data: &'a [u8], linesize: usize },
    Planar {
        planes: [&'a [u8]; 3],
        linesizes: [usize; 3],
    },
}

/// Scratch state reused across frames: the per-plane residual/bit
/// buffers plus a private copy of the source used only to perform the
/// in-place RGB mangle without requiring a `&mut` picture from callers.
///
/// See: 9. DESIGN NOTES "In-place RGB mangle"
pub struct FrameScratch {
    plane: PlaneScratch,
    mangle: Vec<u8>,
}

impl FrameScratch {
    pub fn new() -> Self {
        Self {
            plane: PlaneScratch::new(),
            mangle: Vec::new(),
        }
    }
}

impl Default for FrameScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes one picture into a freshly allocated packet.
///
/// See: * 4.7. FrameEncoder
///      * 6. EXTERNAL INTERFACES (Packet byte layout)
pub fn encode_picture(
    scratch: &mut FrameScratch,
    format: PixelFormat,
    prediction: Prediction,
    width: usize,
    height: usize,
    slices: usize,
    picture: &Picture,
) -> Result<Vec<u8>> {
    trace!(
        "encode_picture: format={:?} {}x{} prediction={:?} slices={}",
        format,
        width,
        height,
        prediction,
        slices
    );

    let planes = format.planes();
    let upper_bound = (256 + 4 * slices + width * height) * planes + 4;
    let mut out = ByteStream::new(upper_bound)?;

    match picture {
        Picture::Interleaved { data, linesize } => {
            let step = planes;
            if scratch.mangle.len() < data.len() {
                scratch.mangle.resize(data.len(), 0);
            }
            scratch.mangle[..data.len()].copy_from_slice(data);
            mangle_rgb_in_place(&mut scratch.mangle[..data.len()], step, width, height, *linesize);
            debug!("encode_picture: rgb mangle complete");

            let order = format.rgb_order();
            for &offset in order {
                encode_plane(
                    &mut scratch.plane,
                    &mut out,
                    &scratch.mangle[offset..],
                    *linesize,
                    step,
                    width,
                    height,
                    prediction,
                    slices,
                )?;
            }
        }
        Picture::Planar { planes: srcs, linesizes } => {
            for i in 0..planes {
                let (pw, ph) = format.plane_dimensions(i, width, height);
                encode_plane(
                    &mut scratch.plane,
                    &mut out,
                    srcs[i],
                    linesizes[i],
                    1,
                    pw,
                    ph,
                    prediction,
                    slices,
                )?;
            }
        }
    }

    let frame_info = (prediction.frame_pred()) << 8;
    out.put_le32(frame_info)?;

    let len = out.tell();
    Ok(out.finish(len))
}
