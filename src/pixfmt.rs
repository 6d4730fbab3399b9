//! Picture layouts and prediction methods accepted by the encoder.
//!
//! See: * 3. DATA MODEL (Picture input)
//!      * 4.3. Predictor (ff_ut_pred_order)
//!      * 4.7. FrameEncoder (channel orderings)

use crate::constants::{
    FOURCC_RGB, FOURCC_RGBA, FOURCC_YUV420, FOURCC_YUV422, UTVIDEO_420, UTVIDEO_422, UTVIDEO_RGB,
    UTVIDEO_RGBA,
};
use crate::error::{Error, Result};

/// One of the four pixel layouts this encoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Interleaved RGB, 3 bytes/pixel.
    Rgb24,
    /// Interleaved RGBA, 4 bytes/pixel.
    Rgba,
    /// Planar YUV 4:2:2, chroma width halved.
    Yuv422P,
    /// Planar YUV 4:2:0, chroma width and height halved.
    Yuv420P,
}

impl PixelFormat {
    /// Number of planes this format is split into.
    pub fn planes(self) -> usize {
        match self {
            PixelFormat::Rgb24 => 3,
            PixelFormat::Rgba => 4,
            PixelFormat::Yuv422P | PixelFormat::Yuv420P => 3,
        }
    }

    /// `original_format` value written into the extradata (§4.8).
    pub fn utvideo_tag(self) -> u32 {
        match self {
            PixelFormat::Rgb24 => UTVIDEO_RGB,
            PixelFormat::Rgba => UTVIDEO_RGBA,
            PixelFormat::Yuv420P => UTVIDEO_420,
            PixelFormat::Yuv422P => UTVIDEO_422,
        }
    }

    /// The container-level FourCC a muxer maps this format to (§6).
    pub fn fourcc(self) -> [u8; 4] {
        match self {
            PixelFormat::Rgb24 => FOURCC_RGB,
            PixelFormat::Rgba => FOURCC_RGBA,
            PixelFormat::Yuv420P => FOURCC_YUV420,
            PixelFormat::Yuv422P => FOURCC_YUV422,
        }
    }

    /// Plane-index -> interleaved channel-offset table (§4.7).
    ///
    /// Only meaningful for the RGB-family formats; planar formats iterate
    /// plane index directly.
    pub(crate) fn rgb_order(self) -> &'static [usize] {
        match self {
            PixelFormat::Rgb24 => &[1, 2, 0],
            PixelFormat::Rgba => &[1, 2, 0, 3],
            _ => &[],
        }
    }

    /// Dimensions of plane `i` given a luma/base size of `width x height`.
    pub(crate) fn plane_dimensions(
        self,
        i: usize,
        width: usize,
        height: usize,
    ) -> (usize, usize) {
        match self {
            PixelFormat::Rgb24 | PixelFormat::Rgba => (width, height),
            PixelFormat::Yuv422P => {
                if i == 0 {
                    (width, height)
                } else {
                    (width >> 1, height)
                }
            }
            PixelFormat::Yuv420P => {
                if i == 0 {
                    (width, height)
                } else {
                    (width >> 1, height >> 1)
                }
            }
        }
    }

    /// Parses a config-surface format name (`"rgb24"`, `"rgba"`,
    /// `"yuv422p"`, `"yuv420p"`) into a [`PixelFormat`].
    ///
    /// See: §7 `InvalidPixelFormat`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "rgb24" => Ok(PixelFormat::Rgb24),
            "rgba" => Ok(PixelFormat::Rgba),
            "yuv422p" => Ok(PixelFormat::Yuv422P),
            "yuv420p" => Ok(PixelFormat::Yuv420P),
            other => Err(Error::InvalidPixelFormat(format!(
                "unrecognized pixel format {:?}, expected one of rgb24|rgba|yuv422p|yuv420p",
                other
            ))),
        }
    }

    /// Validates `width`/`height` against this format's subsampling rules.
    ///
    /// See: §7 `InvalidDimensions`.
    pub fn validate_dimensions(self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions(format!(
                "zero dimension: {}x{}",
                width, height
            )));
        }
        match self {
            PixelFormat::Rgb24 | PixelFormat::Rgba => Ok(()),
            PixelFormat::Yuv422P => {
                if width % 2 != 0 {
                    Err(Error::InvalidDimensions(format!(
                        "yuv422p requires even width, got {}",
                        width
                    )))
                } else {
                    Ok(())
                }
            }
            PixelFormat::Yuv420P => {
                if width % 2 != 0 || height % 2 != 0 {
                    Err(Error::InvalidDimensions(format!(
                        "yuv420p requires even width and height, got {}x{}",
                        width, height
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// A pixel-domain predictor.
///
/// See: 4.3. Predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// `residual[y,x] = src[y,x]`.
    None,
    /// Streamwise left-neighbour difference, seeded with `0x80`.
    Left,
    /// JPEG-LS-style median predictor.
    Median,
}

impl Prediction {
    /// Remaps an external method integer `{0..4}` to a supported
    /// [`Prediction`], rejecting the GRADIENT/PLANE modes this encoder
    /// does not implement.
    ///
    /// See: 4.3 `ff_ut_pred_order`, 4.7 `pred_order[]`.
    pub fn from_method(method: u8) -> Result<Self> {
        match method {
            0 => Ok(Prediction::None),
            1 => Ok(Prediction::Left),
            2 => Ok(Prediction::Median),
            3 | 4 => Err(Error::UnsupportedPrediction(format!(
                "prediction method {} (GRADIENT/PLANE) is not supported",
                method
            ))),
            other => Err(Error::UnsupportedPrediction(format!(
                "unknown prediction method {}",
                other
            ))),
        }
    }

    /// The `frame_pred` value written into the frame_info trailer (§4.7).
    pub(crate) fn frame_pred(self) -> u32 {
        match self {
            Prediction::None => 0,
            Prediction::Left => 1,
            Prediction::Median => 2,
        }
    }
}
